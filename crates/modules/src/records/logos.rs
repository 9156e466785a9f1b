use crate::grouping::GroupingStrategy;
use crate::record::Record;
use serde::Deserialize;
use vitae_render_core::{BackendKind, RenderError};
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;

/// A row of logo images, usually placed in the sidebar.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Logos {
    pub logos: Vec<String>,
}

impl Logos {
    fn markup<W: MarkupWriter>(&self, w: &mut W) -> String {
        if self.logos.is_empty() {
            return String::new();
        }
        let mut out = w.open_div("logos");
        out.push_str(&w.open_div("align"));
        for (i, src) in self.logos.iter().enumerate() {
            out.push_str(&w.img_block(&format!("logo{}", i), src, ""));
        }
        out.push_str(&w.close_block());
        out.push_str(&w.close_block());
        out
    }
}

impl Record for Logos {
    const NAME: &'static str = "Logos";
    const DEFAULT_SECTION: &'static str = "";
    const DEFAULT_LEVEL: u8 = 0;
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Single;

    fn render_latex(&self, _ctx: &mut LatexContext) -> Result<String, RenderError> {
        Err(RenderError::unsupported(Self::NAME, BackendKind::Latex))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(self.markup(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::records::LogosModule;
    use serde_json::json;

    #[test]
    fn test_module_without_section() {
        let mut module = LogosModule::new();
        module.load(&json!(["a.png", "b.png"])).unwrap();
        let out = module.render_html(&mut HtmlContext::new()).unwrap();
        assert_eq!(
            out,
            "\t\t\t<div class=\"logos\">
\t\t\t\t<div class=\"align\">
\t\t\t\t\t<img class=\"logo0\" src=\"a.png\" alt=\"\"/>
\t\t\t\t\t<img class=\"logo1\" src=\"b.png\" alt=\"\"/>
\t\t\t\t</div>
\t\t\t</div>
"
        );
    }
}
