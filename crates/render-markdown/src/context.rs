use crate::serializer::MarkdownSerializer;
use crate::tags::MarkdownTags;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use vitae_render_core::{
    BackendKind, BlockKind, FragmentSerializer, RenderError, StructuralStack, category,
};
use vitae_render_html::{HtmlSerializer, MarkupWriter};
use vitae_types::dates::{self, DEFAULT_DATE_FORMAT};
use vitae_types::{Fragment, PersonalData};

const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownOptions {
    /// Document title. When empty, the author's name is used.
    pub title: String,
    pub date_format: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Render state for one Markdown document.
///
/// Holds two serializers: free text is written as Markdown, while fragments
/// inside record blocks use the HTML serializer since Markdown is not
/// interpreted inside raw block markup.
pub struct MarkdownContext {
    stack: StructuralStack<MarkdownTags>,
    options: MarkdownOptions,
    serializer: Arc<dyn FragmentSerializer>,
    block_serializer: Arc<dyn FragmentSerializer>,
}

impl Default for MarkdownContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkdownContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownContext")
            .field("options", &self.options)
            .field("open_blocks", &self.stack.depth())
            .finish_non_exhaustive()
    }
}

impl MarkdownContext {
    pub fn new() -> Self {
        Self::with_options(MarkdownOptions::default())
    }

    pub fn with_options(options: MarkdownOptions) -> Self {
        Self {
            stack: StructuralStack::new(MarkdownTags::new()),
            options,
            serializer: Arc::new(MarkdownSerializer),
            block_serializer: Arc::new(HtmlSerializer),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.options.title = title.to_string();
        self
    }

    pub fn with_date_format(mut self, format: &str) -> Self {
        self.options.date_format = format.to_string();
        self
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    pub fn install_serializer(&mut self, serializer: Arc<dyn FragmentSerializer>) {
        self.serializer = serializer;
    }

    /// Serializer for fragments embedded in record blocks.
    pub fn install_block_serializer(&mut self, serializer: Arc<dyn FragmentSerializer>) {
        self.block_serializer = serializer;
    }

    /// A fragment as Markdown text.
    pub fn markdown(&self, fragment: &Fragment) -> String {
        self.serializer.serialize(fragment)
    }

    /// Free-standing Markdown text between blank lines.
    ///
    /// The leading blank line ends any HTML block written just before.
    pub fn paragraph(&self, fragment: &Fragment) -> String {
        let text = self.markdown(fragment);
        if text.is_empty() {
            return text;
        }
        format!("\n{}\n\n", text.trim_matches('\n'))
    }

    pub fn link(&self, href: &str, text: &str) -> String {
        format!("[{}]({})", text, href)
    }

    /// Assembles the document: a `title:` line, a blank line, then the modules.
    pub fn render_document<F>(
        &mut self,
        personal: Option<&PersonalData>,
        mut run_category: F,
    ) -> Result<String, RenderError>
    where
        F: FnMut(&mut Self, &str) -> Result<String, RenderError>,
    {
        self.stack.reset();

        let title = match (self.options.title.is_empty(), personal) {
            (true, Some(personal)) => personal.name.clone(),
            _ => self.options.title.clone(),
        };
        let mut markdown = format!("title: {}\n\n", title);
        markdown.push_str(&run_category(self, category::DEFAULT)?);

        if !self.stack.is_empty() {
            let open = self.stack.depth();
            self.stack.reset();
            return Err(RenderError::UnbalancedBlocks {
                backend: BackendKind::Markdown,
                open,
            });
        }
        Ok(markdown)
    }
}

impl MarkupWriter for MarkdownContext {
    fn backend(&self) -> BackendKind {
        BackendKind::Markdown
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
        self.block_serializer.serialize(fragment)
    }

    fn format_date(&self, input: &str) -> String {
        dates::format_date(input, &self.options.date_format)
    }

    fn introduction(&mut self, introduction: &Fragment) -> String {
        self.paragraph(introduction)
    }

    fn open_section(
        &mut self,
        level: u8,
        name: &str,
        class: &str,
        _icon: Option<&str>,
    ) -> Result<String, RenderError> {
        if level > MAX_HEADING_LEVEL {
            return Err(RenderError::InvalidHeadingLevel {
                backend: BackendKind::Markdown,
                level,
            });
        }
        self.stack.open(BlockKind::Section, class);
        if level == 0 || name.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("\n{} {}\n\n", "#".repeat(usize::from(level)), name))
    }
}
