//! Modules with fixed content that read nothing from the input.

use crate::error::LoadError;
use crate::header::SectionHeader;
use crate::module::Module;
use serde_json::Value;
use vitae_render_core::RenderError;
use vitae_render_html::{HtmlContext, MarkupWriter, escape_html};
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::Fragment;

const DEFAULT_LEVEL: u8 = 2;

/// Wraps `body` in the header's section when the level asks for one.
fn sectioned<W, F>(header: &SectionHeader, w: &mut W, body: F) -> Result<String, RenderError>
where
    W: MarkupWriter,
    F: FnOnce(&mut W) -> String,
{
    if header.level == 0 {
        return Ok(body(w));
    }
    let mut out = w.open_section(
        header.level,
        &header.section,
        &header.class(),
        header.icon.as_deref(),
    )?;
    out.push_str(&body(w));
    out.push_str(&w.close_block());
    Ok(out)
}

/// A section holding one fixed text.
#[derive(Debug, Clone)]
pub struct TextModule {
    header: SectionHeader,
    text: Fragment,
}

impl TextModule {
    pub fn new(section: &str, text: impl Into<Fragment>) -> Self {
        Self {
            header: SectionHeader::new(DEFAULT_LEVEL, section),
            text: text.into(),
        }
    }

    pub fn with_header(mut self, header: SectionHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.header.level = level;
        self
    }
}

impl Module for TextModule {
    fn header(&self) -> &SectionHeader {
        &self.header
    }

    fn load(&mut self, _value: &Value) -> Result<(), LoadError> {
        log::debug!("Text module '{}' ignores its input", self.header.section);
        Ok(())
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut out = ctx.open_section(self.header.level, &self.header.section)?;
        out.push_str(&ctx.fragment(&self.text));
        out.push('\n');
        Ok(out)
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        let text = ctx.fragment(&self.text);
        sectioned(&self.header, ctx, |ctx| ctx.paragraph_block("text", &text))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        let text = ctx.paragraph(&self.text);
        sectioned(&self.header, ctx, |_| text)
    }
}

/// A section holding one sentence with a link: `before`, the link, `after`.
///
/// `before` and `after` are plain text written verbatim around the link.
#[derive(Debug, Clone)]
pub struct LinkModule {
    header: SectionHeader,
    before: String,
    link: String,
    /// Link text. The URL itself is shown when empty.
    text: String,
    after: String,
}

impl LinkModule {
    pub fn new(section: &str, link: &str) -> Self {
        Self {
            header: SectionHeader::new(DEFAULT_LEVEL, section),
            before: String::new(),
            link: link.to_string(),
            text: String::new(),
            after: String::new(),
        }
    }

    pub fn with_header(mut self, header: SectionHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_before(mut self, before: &str) -> Self {
        self.before = before.to_string();
        self
    }

    pub fn with_after(mut self, after: &str) -> Self {
        self.after = after.to_string();
        self
    }

    fn link_text(&self) -> &str {
        if self.text.is_empty() { &self.link } else { &self.text }
    }
}

impl Module for LinkModule {
    fn header(&self) -> &SectionHeader {
        &self.header
    }

    fn load(&mut self, _value: &Value) -> Result<(), LoadError> {
        log::debug!("Link module '{}' ignores its input", self.header.section);
        Ok(())
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError> {
        let mut out = ctx.open_section(self.header.level, &self.header.section)?;
        out.push_str(&self.before);
        if self.text.is_empty() {
            out.push_str(&format!("\\url{{{}}}", self.link));
        } else {
            out.push_str(&format!("\\href{{{}}}{{{}}}", self.link, self.text));
        }
        out.push_str(&self.after);
        out.push('\n');
        Ok(out)
    }

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError> {
        let content = format!(
            "{}{}{}",
            escape_html(&self.before),
            ctx.link_block("link", &self.link, &escape_html(self.link_text()), ""),
            escape_html(&self.after)
        );
        sectioned(&self.header, ctx, |ctx| ctx.paragraph_block("text", &content))
    }

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError> {
        let content = format!(
            "\n{}{}{}\n\n",
            self.before,
            ctx.link(&self.link, self.link_text()),
            self.after
        );
        sectioned(&self.header, ctx, |_| content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_module_latex() {
        let module = TextModule::new("About", "Hello **world**");
        let out = module.render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(out, "\\subsection{About}\n\nHello \\textbf{world}\n");
    }

    #[test]
    fn test_text_module_html() {
        let module = TextModule::new("About", "Hello **world**");
        let out = module.render_html(&mut HtmlContext::new()).unwrap();
        assert_eq!(
            out,
            "\t\t\t<section class=\"section about\">
\t\t\t\t<h3 class=\"about\">About</h3>
\t\t\t\t<p class=\"text\">
\t\t\t\t\tHello <strong>world</strong>
\t\t\t\t</p>
\t\t\t</section>
"
        );
    }

    #[test]
    fn test_text_module_ignores_input() {
        let mut module = TextModule::new("About", "Fixed").with_level(0);
        module.load(&json!({"anything": 1})).unwrap();
        let out = module.render_markdown(&mut MarkdownContext::new()).unwrap();
        assert_eq!(out, "\nFixed\n\n");
    }

    #[test]
    fn test_link_module_backends() {
        let module = LinkModule::new("Source", "https://example.org/cv")
            .with_before("The source is ")
            .with_text("online")
            .with_after(".");

        let latex = module.render_latex(&mut LatexContext::new()).unwrap();
        assert_eq!(
            latex,
            "\\subsection{Source}\n\nThe source is \\href{https://example.org/cv}{online}.\n"
        );

        let html = module.render_html(&mut HtmlContext::new()).unwrap();
        assert!(html.contains(
            "The source is <a class=\"link\" href=\"https://example.org/cv\">online</a>.\n"
        ));

        let markdown = module.render_markdown(&mut MarkdownContext::new()).unwrap();
        assert_eq!(
            markdown,
            "\n## Source\n\n\nThe source is [online](https://example.org/cv).\n\n"
        );
    }

    #[test]
    fn test_link_without_text_shows_url() {
        let module = LinkModule::new("Source", "https://example.org");
        let latex = module.render_latex(&mut LatexContext::new()).unwrap();
        assert!(latex.ends_with("\\url{https://example.org}\n"));
        let html = module.render_html(&mut HtmlContext::new()).unwrap();
        assert!(html.contains(">https://example.org</a>"));
    }
}
