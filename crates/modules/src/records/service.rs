use super::award::dated_line;
use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::RenderError;
use vitae_render_html::HtmlContext;
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::de::opt_string_or_number;
use vitae_types::{Fragment, Setup, dates};

/// Academic service: reviewing, committees, organizing.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub year: Option<String>,
    pub description: Fragment,
    pub style: Option<Setup>,
}

impl Service {
    pub fn new(year: &str, description: &str) -> Self {
        Self {
            year: Some(year.to_string()),
            description: Fragment::new(description),
            style: None,
        }
    }
}

impl Record for Service {
    const NAME: &'static str = "Service";
    const DEFAULT_SECTION: &'static str = "Service";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-community");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Declared;

    fn year(&self) -> Option<i32> {
        self.year.as_deref().and_then(dates::extract_year)
    }

    // Service years are often ranges ("2019-2021"), so they are kept verbatim.
    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut body = ctx.format_optional("year", self.year.as_deref());
        body.push_str(&ctx.format_fragment("description", &self.description));
        body.push_str(&ctx.format_style(self.style.as_ref()));
        Ok(ctx.record("service", &body))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(dated_line(ctx, self.year.as_deref(), &self.description))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(dated_line(ctx, self.year.as_deref(), &self.description))
    }
}
