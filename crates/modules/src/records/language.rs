use crate::grouping::GroupingStrategy;
use crate::record::Record;
use vitae_render_core::{BackendKind, RenderError};
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::Language;

impl Record for Language {
    const NAME: &'static str = "Language";
    const DEFAULT_SECTION: &'static str = "Languages";
    const DEFAULT_ICON: Option<&'static str> = Some("iconoir-language");
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Declared;

    fn render_latex(&self, _ctx: &mut LatexContext) -> Result<String, RenderError> {
        Err(RenderError::unsupported(Self::NAME, BackendKind::Latex))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(ctx.language_entry(self))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(ctx.language_entry(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::records::LanguageModule;
    use serde_json::json;

    #[test]
    fn test_module_in_markdown() {
        let mut module = LanguageModule::new();
        module
            .load(&json!({
                "order": ["Spoken"],
                "Spoken": [{"name": "Norwegian", "level": "native"}, {"name": "English"}]
            }))
            .unwrap();
        let out = module.render_markdown(&mut MarkdownContext::new()).unwrap();
        assert_eq!(
            out,
            "\n# Languages\n\n\n## Spoken\n\n<div class=\"language\">
\t<span class=\"language-name\">Norwegian</span> <span class=\"language-level\">(native)</span>
</div>
<div class=\"language\">
\t<span class=\"language-name\">English</span>
</div>
"
        );
    }

    #[test]
    fn test_latex_is_unsupported() {
        let language = Language {
            name: "Norwegian".into(),
            ..Language::default()
        };
        assert!(matches!(
            language.render_latex(&mut LatexContext::new()),
            Err(RenderError::Unsupported { record: "Language", .. })
        ));
    }
}
