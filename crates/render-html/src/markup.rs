use crate::serializer::escape_html;
use vitae_render_core::{BackendKind, BlockKind, RenderError, indentation};
use vitae_types::{Contact, Fragment, Language};

const ORCID_ICON: &str = "https://info.orcid.org/wp-content/uploads/2019/11/orcid_16x16.png";

/// Block-markup primitives shared by the HTML and Markdown backends.
///
/// Implementors own a structural stack and expose it through the required
/// methods. The provided methods build every leaf on top of them, querying
/// [`MarkupWriter::current_indent`] instead of taking an indentation level.
/// Leaves with empty content produce nothing, so optional fields never leave
/// empty wrapper tags behind.
pub trait MarkupWriter {
    fn backend(&self) -> BackendKind;

    fn open_block(&mut self, kind: BlockKind, class: &str) -> String;

    /// Closes the innermost open block. Nothing is emitted when no block is open.
    fn close_block(&mut self) -> String;

    fn current_indent(&self) -> usize;

    /// Number of blocks still open.
    fn depth(&self) -> usize;

    /// A fragment serialized for embedding inside block markup.
    fn fragment(&self, fragment: &Fragment) -> String;

    fn format_date(&self, input: &str) -> String;

    /// Opens a section block and returns it with its heading.
    fn open_section(
        &mut self,
        level: u8,
        name: &str,
        class: &str,
        icon: Option<&str>,
    ) -> Result<String, RenderError>;

    /// The introduction text below a module heading.
    fn introduction(&mut self, introduction: &Fragment) -> String {
        let content = self.fragment(introduction);
        self.paragraph_block("introduction", &content)
    }

    fn pad(&self) -> String {
        indentation(self.current_indent())
    }

    fn open_div(&mut self, class: &str) -> String {
        self.open_block(BlockKind::Div, class)
    }

    fn open_list(&mut self, ordered: bool, class: &str) -> String {
        self.open_block(BlockKind::List { ordered }, class)
    }

    /// A `div` holding `content` on its own line.
    fn simple_div_block(&mut self, class: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        let mut out = self.open_div(class);
        out.push_str(&self.pad());
        out.push_str(content);
        out.push('\n');
        out.push_str(&self.close_block());
        out
    }

    /// A `div` holding plain text, escaped for markup.
    fn text_div_block(&mut self, class: &str, text: &str) -> String {
        self.simple_div_block(class, &escape_html(text))
    }

    fn fragment_div_block(&mut self, class: &str, fragment: &Fragment) -> String {
        let content = self.fragment(fragment);
        self.simple_div_block(class, &content)
    }

    fn paragraph_block(&self, class: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        let indent = self.current_indent();
        format!(
            "{pad}<p class=\"{class}\">\n{inner}{content}\n{pad}</p>\n",
            pad = indentation(indent),
            inner = indentation(indent + 1),
        )
    }

    fn span_block(&self, class: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("<span class=\"{}\">{}</span>", class, content)
    }

    /// A span holding a fragment followed by `after`; empty fragments give nothing.
    fn fragment_span(&self, class: &str, fragment: &Fragment, after: &str) -> String {
        if fragment.is_empty() {
            return String::new();
        }
        self.span_block(class, &format!("{}{}", self.fragment(fragment), after))
    }

    /// A link to `href`; `content` is markup and is written as given.
    fn link_block(&self, class: &str, href: &str, content: &str, after: &str) -> String {
        if href.is_empty() {
            return String::new();
        }
        format!(
            "<a class=\"{}\" href=\"{}\">{}</a>{}",
            class,
            escape_html(href),
            content,
            after
        )
    }

    fn list_item(&self, class: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("{}<li class=\"{}\">{}</li>\n", self.pad(), class, content)
    }

    fn img_block(&self, class: &str, src: &str, alt: &str) -> String {
        format!(
            "{}<img class=\"{}\" src=\"{}\" alt=\"{}\"/>\n",
            self.pad(),
            class,
            escape_html(src),
            escape_html(alt)
        )
    }

    fn idiomatic_block(&self, class: &str, content: &str) -> String {
        format!("<i class=\"{}\">{}</i>", class, content)
    }

    /// The contact list used in sidebars and by the contact module.
    fn contact_list(&mut self, contact: &Contact) -> String {
        if contact.is_empty() {
            return String::new();
        }
        let mut out = self.open_list(false, "contact-list");
        for email in &contact.email {
            let content = self.idiomatic_block("contact-icon iconoir-mail", "")
                + &self.link_block("mail-link", &format!("mailto:{}", email), &escape_html(email), "");
            out.push_str(&self.list_item("mail", &content));
        }
        if let Some(address) = &contact.address {
            let text = escape_html(&address.one_line());
            let target = match address.link.as_deref() {
                Some(link) => self.link_block("address-link", link, &text, ""),
                None => self.span_block("address-text", &text),
            };
            let content = self.idiomatic_block("contact-icon iconoir-pin-alt", "") + &target;
            out.push_str(&self.list_item("address", &content));
        }
        if let Some(pdf) = &contact.pdf {
            let content = self.idiomatic_block("contact-icon iconoir-user", "")
                + &self.link_block("pdf-link", pdf, "Curriculum vitae", "");
            out.push_str(&self.list_item("pdf", &content));
        }
        if let Some(website) = &contact.website {
            let content = self.idiomatic_block("contact-icon iconoir-globe", "")
                + &self.link_block("website-link", website, &escape_html(website), "");
            out.push_str(&self.list_item("website", &content));
        }
        if let Some(github) = &contact.github {
            let content = self.idiomatic_block("contact-icon iconoir-github", "")
                + &self.link_block(
                    "github-link",
                    &format!("https://github.com/{}", github),
                    &escape_html(github),
                    "",
                );
            out.push_str(&self.list_item("github", &content));
        }
        if let Some(orcid) = &contact.orcid {
            let content = format!("<img class=\"contact-icon orcid\" src=\"{}\" alt=\"\"/>", ORCID_ICON)
                + &self.link_block("orcid-link", &format!("https://orcid.org/{}", orcid), &escape_html(orcid), "");
            out.push_str(&self.list_item("orcid", &content));
        }
        if let Some(linkedin) = &contact.linkedin {
            let content = self.idiomatic_block("contact-icon iconoir-linkedin", "")
                + &self.link_block(
                    "linkedin-link",
                    &format!("https://linkedin.com/in/{}", linkedin),
                    &escape_html(linkedin),
                    "",
                );
            out.push_str(&self.list_item("linkedin", &content));
        }
        out.push_str(&self.close_block());
        out
    }

    /// One language: its name followed by the level in parentheses.
    fn language_entry(&mut self, language: &Language) -> String {
        let mut content = self.fragment_span("language-name", &language.name, "");
        if !language.level.is_empty() {
            let level = format!("({})", self.fragment(&language.level));
            if !content.is_empty() {
                content.push(' ');
            }
            content.push_str(&self.span_block("language-level", &level));
        }
        self.simple_div_block("language", &content)
    }

    fn language_list(&mut self, languages: &[Language]) -> String {
        if languages.is_empty() {
            return String::new();
        }
        let mut out = self.open_div("language-list");
        for language in languages {
            out.push_str(&self.language_entry(language));
        }
        out.push_str(&self.close_block());
        out
    }
}
