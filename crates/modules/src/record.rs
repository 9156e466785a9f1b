use crate::grouping::GroupingStrategy;
use serde::de::DeserializeOwned;
use vitae_render_core::RenderError;
use vitae_render_html::HtmlContext;
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;

/// One entry of a module: a job, a publication, a talk...
///
/// Records are built once from input data and never change afterwards.
/// Every record type spells out its rendering for each backend; a backend it
/// cannot be expressed in returns [`RenderError::Unsupported`], while a
/// record that is empty by design renders as an empty string.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;
    const DEFAULT_SECTION: &'static str;
    const DEFAULT_LEVEL: u8 = 1;
    const DEFAULT_ICON: Option<&'static str> = None;
    const DEFAULT_GROUPING: GroupingStrategy;

    /// The year used for chronological grouping.
    fn year(&self) -> Option<i32> {
        None
    }

    fn render_latex(&self, ctx: &mut LatexContext) -> Result<String, RenderError>;

    fn render_html(&self, ctx: &mut HtmlContext) -> Result<String, RenderError>;

    fn render_markdown(&self, ctx: &mut MarkdownContext) -> Result<String, RenderError>;
}
