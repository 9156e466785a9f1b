use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter, escape_html};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, Setup, dates};

/// A position held, with optional start and end dates.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub start: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub end: Option<String>,
    pub title: Fragment,
    pub organization: Fragment,
    pub description: Fragment,
    pub style: Option<Setup>,
}

impl Job {
    pub fn new(title: &str) -> Self {
        Self {
            title: Fragment::new(title),
            ..Self::default()
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("title", &self.title));
        if let Some(start) = &self.start {
            let end = self
                .end
                .as_deref()
                .map(|end| escape_html(&w.format_date(end)))
                .unwrap_or_default();
            let time = format!("{} &hyphen; {}", escape_html(&w.format_date(start)), end);
            out.push_str(&w.simple_div_block("time", &time));
        }
        out.push_str(&w.close_block());
        out.push_str(&w.fragment_div_block("organization", &self.organization));
        out.push_str(&w.fragment_div_block("details", &self.description));
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Job {
    const NAME: &'static str = "Job";
    const DEFAULT_SECTION: &'static str = "Work Experience";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-brain-research");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Declared;

    fn year(&self) -> Option<i32> {
        self.start.as_deref().and_then(dates::extract_year)
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = String::new();
        if let Some(start) = &self.start {
            body.push_str(&ctx.format_variable("start", &ctx.format_date(start)));
        }
        if let Some(end) = &self.end {
            body.push_str(&ctx.format_variable("end", &ctx.format_date(end)));
        }
        body.push_str(&ctx.format_fragment("title", &self.title));
        body.push_str(&ctx.format_fragment("organization", &self.organization));
        body.push_str(&ctx.format_fragment("description", &self.description));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("job", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}
