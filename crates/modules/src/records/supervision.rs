use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, Setup, dates};

/// A supervised student or thesis.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Supervision {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub when: Option<String>,
    pub name: Fragment,
    pub role: Fragment,
    pub organization: Fragment,
    pub description: Fragment,
    pub style: Option<Setup>,
}

impl Supervision {
    pub fn new(name: &str) -> Self {
        Self {
            name: Fragment::new(name),
            ..Self::default()
        }
    }

    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        let mut out = w.open_div("item");
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("title", &self.name));
        out.push_str(&w.fragment_div_block("role", &self.role));
        out.push_str(&w.close_block());
        out.push_str(&w.open_div("align"));
        out.push_str(&w.fragment_div_block("organization", &self.organization));
        if let Some(when) = &self.when {
            out.push_str(&w.text_div_block("time", when));
        }
        out.push_str(&w.close_block());
        out.push_str(&w.fragment_div_block("details", &self.description));
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Supervision {
    const NAME: &'static str = "Supervision";
    const DEFAULT_SECTION: &'static str = "Supervision";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-community");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Declared;

    fn year(&self) -> Option<i32> {
        self.when.as_deref().and_then(dates::extract_year)
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = ctx.format_optional("year", self.when.as_deref());
        body.push_str(&ctx.format_fragment("name", &self.name));
        body.push_str(&ctx.format_fragment("role", &self.role));
        body.push_str(&ctx.format_fragment("organization", &self.organization));
        body.push_str(&ctx.format_fragment("description", &self.description));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("supervision", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}
