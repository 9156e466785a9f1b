use crate::markup::MarkupWriter;
use crate::options::HtmlOptions;
use crate::serializer::{HtmlSerializer, escape_html};
use crate::tags::HtmlTags;
use std::fmt;
use std::sync::Arc;
use vitae_render_core::{
    BackendKind, BlockKind, FragmentSerializer, RenderError, StructuralStack, category,
};
use vitae_types::{Fragment, PersonalData, dates};

/// Highest module level: its group headings use `<h6>`.
pub const MAX_SECTION_LEVEL: u8 = 5;

/// Computes the page `<title>` from the author's identity.
pub type TitleFn = Arc<dyn Fn(&PersonalData) -> String + Send + Sync>;

/// Render state for one HTML document.
pub struct HtmlContext {
    stack: StructuralStack<HtmlTags>,
    options: HtmlOptions,
    title_fn: Option<TitleFn>,
    serializer: Arc<dyn FragmentSerializer>,
}

impl Default for HtmlContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HtmlContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlContext")
            .field("options", &self.options)
            .field("open_blocks", &self.stack.depth())
            .field("custom_title", &self.title_fn.is_some())
            .finish_non_exhaustive()
    }
}

impl HtmlContext {
    pub fn new() -> Self {
        Self::with_options(HtmlOptions::default())
    }

    pub fn with_options(options: HtmlOptions) -> Self {
        Self {
            stack: StructuralStack::new(HtmlTags::new()),
            options,
            title_fn: None,
            serializer: Arc::new(HtmlSerializer),
        }
    }

    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.options.stylesheets.push(href.to_string());
        self
    }

    /// Overrides the default `name - position` page title.
    pub fn with_title_fn<F>(mut self, title_fn: F) -> Self
    where
        F: Fn(&PersonalData) -> String + Send + Sync + 'static,
    {
        self.title_fn = Some(Arc::new(title_fn));
        self
    }

    pub fn with_date_format(mut self, format: &str) -> Self {
        self.options.date_format = format.to_string();
        self
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    pub fn install_serializer(&mut self, serializer: Arc<dyn FragmentSerializer>) {
        self.serializer = serializer;
    }

    fn page_title(&self, personal: &PersonalData) -> String {
        match &self.title_fn {
            Some(title_fn) => title_fn(personal),
            None => format!("{} - {}", personal.name, personal.position),
        }
    }

    fn head(&self, personal: Option<&PersonalData>) -> String {
        let Some(personal) = personal else {
            return "\t<head>\n\t\t<meta charset=\"UTF-8\">\n\t</head>\n".to_string();
        };
        let mut head = String::from("\t<head>\n\t\t<meta charset=\"UTF-8\">\n");
        head.push_str(
            "\t\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        head.push_str("\t\t<meta http-equiv=\"X-UA-Compatible\" content=\"ie=edge\">\n");
        head.push_str(&format!(
            "\t\t<title>{}</title>\n",
            escape_html(&self.page_title(personal))
        ));
        if let Some(favicon) = &self.options.favicon {
            head.push_str(&format!(
                "\t\t<link rel=\"icon\" href=\"{}\" type=\"image/x-icon\">\n",
                favicon
            ));
        }
        let stylesheets = self
            .options
            .icon_stylesheet
            .iter()
            .chain(self.options.stylesheets.iter());
        for href in stylesheets {
            head.push_str(&format!("\t\t<link rel=\"stylesheet\" href=\"{}\">\n", href));
        }
        head.push_str("\t</head>\n");
        head
    }

    fn sidebar<F>(&mut self, personal: &PersonalData, run_category: &mut F) -> Result<String, RenderError>
    where
        F: FnMut(&mut Self, &str) -> Result<String, RenderError>,
    {
        let mut sidebar = self.open_div("sidebar");
        sidebar.push_str(&self.open_div("profile-container"));
        if let Some(photo) = &personal.photo {
            sidebar.push_str(&self.img_block("profile", photo, ""));
        }
        sidebar.push_str(&self.simple_div_block("name", &escape_html(&personal.name)));
        sidebar.push_str(&self.simple_div_block("position", &escape_html(&personal.position)));
        sidebar.push_str(&self.simple_div_block(
            "organization",
            &escape_html(&personal.organization),
        ));
        sidebar.push_str(&self.close_block());
        sidebar.push_str(&self.contact_list(&personal.contact));
        sidebar.push_str(&self.language_list(&personal.languages));
        sidebar.push_str(&run_category(self, category::SIDEBAR)?);
        sidebar.push_str(&self.close_block());
        sidebar.push('\n');
        Ok(sidebar)
    }

    /// Assembles the whole page.
    ///
    /// `run_category` renders the modules registered under a category; it is
    /// asked for [`category::SIDEBAR`] when there is personal data and for
    /// [`category::DEFAULT`] for the main content. Blocks left open by a
    /// module fail the pass.
    pub fn render_document<F>(
        &mut self,
        personal: Option<&PersonalData>,
        mut run_category: F,
    ) -> Result<String, RenderError>
    where
        F: FnMut(&mut Self, &str) -> Result<String, RenderError>,
    {
        self.stack.reset();

        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
        html.push_str(&self.head(personal));
        html.push('\n');
        html.push_str("\t<body>\n\t\t<main>\n");
        if let Some(personal) = personal {
            html.push_str(&self.sidebar(personal, &mut run_category)?);
        }
        html.push_str(&run_category(self, category::DEFAULT)?);
        html.push_str("\t\t</main>\n\t</body>\n</html>");

        if !self.stack.is_empty() {
            let open = self.stack.depth();
            self.stack.reset();
            return Err(RenderError::UnbalancedBlocks {
                backend: BackendKind::Html,
                open,
            });
        }
        Ok(html)
    }
}

impl MarkupWriter for HtmlContext {
    fn backend(&self) -> BackendKind {
        BackendKind::Html
    }

    fn open_block(&mut self, kind: BlockKind, class: &str) -> String {
        self.stack.open(kind, class)
    }

    fn close_block(&mut self) -> String {
        self.stack.close()
    }

    fn current_indent(&self) -> usize {
        self.stack.current_indent()
    }

    fn depth(&self) -> usize {
        self.stack.depth()
    }

    fn fragment(&self, fragment: &Fragment) -> String {
        self.serializer.serialize(fragment)
    }

    fn format_date(&self, input: &str) -> String {
        dates::format_date(input, &self.options.date_format)
    }

    /// Module level `N` is headed by `<h{N+1}>`; `<h1>` is left to the page.
    fn open_section(
        &mut self,
        level: u8,
        name: &str,
        class: &str,
        icon: Option<&str>,
    ) -> Result<String, RenderError> {
        if level > MAX_SECTION_LEVEL {
            return Err(RenderError::InvalidHeadingLevel {
                backend: BackendKind::Html,
                level,
            });
        }
        let mut out = self.stack.open(BlockKind::Section, class);
        let icon = icon
            .filter(|icon| !icon.is_empty())
            .map(|icon| self.idiomatic_block(&format!("section-icon {}", icon), ""))
            .unwrap_or_default();
        if level > 0 && !(name.is_empty() && icon.is_empty()) {
            let tag = level + 1;
            out.push_str(&format!(
                "{}<h{tag} class=\"{}\">{}{}</h{tag}>\n",
                self.pad(),
                class,
                icon,
                escape_html(name),
            ));
        }
        Ok(out)
    }
}
