use crate::grouping::GroupingStrategy;
use crate::record::Record;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::Contact;

// In LaTeX, contact details are title key-values, so the module is meant for
// the "title" category.
impl Record for Contact {
    const NAME: &'static str = "Contact";
    const DEFAULT_SECTION: &'static str = "Contact";
    const DEFAULT_LEVEL: u8 = 0;
    const DEFAULT_GROUPING: GroupingStrategy = GroupingStrategy::Single;

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        Ok(ctx.contact_fields(self))
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        Ok(ctx.contact_list(self))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        Ok(ctx.contact_list(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::records::ContactModule;
    use serde_json::json;

    fn loaded() -> ContactModule {
        let mut module = ContactModule::new();
        module
            .load(&json!({"email": "test@example.org", "github": "tester"}))
            .unwrap();
        module
    }

    #[test]
    fn test_latex_fields() {
        let out = loaded().render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(out, "\temail = {test@example.org},\n\tgithub = {tester},\n");
    }

    #[test]
    fn test_html_list() {
        let out = loaded().render_html(&mut HtmlContext::new()).unwrap();
        assert!(out.starts_with("\t\t\t<ul class=\"contact-list\">\n"));
        assert!(out.contains(
            "<li class=\"github\"><i class=\"contact-icon iconoir-github\"></i><a class=\"github-link\" href=\"https://github.com/tester\">tester</a></li>\n"
        ));
        assert!(out.ends_with("\t\t\t</ul>\n"));
    }

    #[test]
    fn test_html_escapes_plain_fields() {
        let mut module = ContactModule::new();
        module
            .load(&json!({
                "email": "a&b@example.org",
                "website": "https://example.org/?q=\"x\"&lang=en"
            }))
            .unwrap();
        let out = module.render_html(&mut HtmlContext::new()).unwrap();
        assert!(out.contains(
            "<a class=\"mail-link\" href=\"mailto:a&amp;b@example.org\">a&amp;b@example.org</a>"
        ));
        assert!(out.contains(
            "href=\"https://example.org/?q=&quot;x&quot;&amp;lang=en\">https://example.org/?q=&quot;x&quot;&amp;lang=en</a>"
        ));
    }
}
