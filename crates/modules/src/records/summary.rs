use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::{BackendKind, RenderError};
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::Fragment;

/// A free-text summary, loaded directly from a string.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Summary {
    pub text: Fragment,
}

impl Summary {
    pub fn new(text: &str) -> Self {
        Self {
            text: Fragment::new(text),
        }
    }
}

impl Record for Summary {
    const NAME: &'static str = "Summary";
    const DEFAULT_SECTION: &'static str = "Summary";
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Single;

    fn render_latex(&self, _ctx: &mut LatexContext) -> Result<String, RenderError> {
        Err(RenderError::unsupported(Self::NAME, BackendKind::Latex))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(ctx.fragment_div_block("details", &self.text))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(ctx.paragraph(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::records::SummaryModule;
    use serde_json::json;

    #[test]
    fn test_loads_from_string() {
        let mut module = SummaryModule::new();
        module.load(&json!("I *like* tests.")).unwrap();
        assert_eq!(module.groups()[0].records, vec![Summary::new("I *like* tests.")]);
    }

    #[test]
    fn test_markdown_passes_through() {
        let out = Summary::new("I *like* tests.")
            .render_markdown(&mut MarkdownContext::new())
            .unwrap();
        assert_eq!(out, "\nI *like* tests.\n\n");
    }

    #[test]
    fn test_html_details_block() {
        let out = Summary::new("I *like* tests.").render_html(&mut HtmlContext::new()).unwrap();
        assert_eq!(
            out,
            "\t\t\t<div class=\"details\">\n\t\t\t\tI <em>like</em> tests.\n\t\t\t</div>\n"
        );
    }

    #[test]
    fn test_empty_summary_renders_nothing() {
        assert_eq!(Summary::default().render_html(&mut HtmlContext::new()).unwrap(), "");
        assert_eq!(Summary::default().render_markdown(&mut MarkdownContext::new()).unwrap(), "");
    }
}
