use vitae_modules::Module;
use vitae_render_core::{BackendKind, RenderError, SerializerTable};
use vitae_render_html::HtmlContext;
use vitae_render_latex::LatexContext;
use vitae_render_markdown::MarkdownContext;
use vitae_types::PersonalData;

/// A module registered with a builder, with where it loads from and renders to.
pub(crate) struct ModuleEntry {
    pub load_key: Option<String>,
    pub module: Box<dyn Module>,
    pub category: String,
}

/// One output format and its render state.
#[derive(Debug)]
pub enum Backend {
    Latex(LatexContext),
    Html(HtmlContext),
    Markdown(MarkdownContext),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Latex(_) => BackendKind::Latex,
            Backend::Html(_) => BackendKind::Html,
            Backend::Markdown(_) => BackendKind::Markdown,
        }
    }

    /// Installs the fragment serializers this backend needs from `table`.
    ///
    /// Markdown also takes the HTML serializer for fragments inside record blocks.
    pub fn install_serializers(&mut self, table: &SerializerTable) -> Result<(), RenderError> {
        match self {
            Backend::Latex(ctx) => ctx.install_serializer(table.get(BackendKind::Latex)?),
            Backend::Html(ctx) => ctx.install_serializer(table.get(BackendKind::Html)?),
            Backend::Markdown(ctx) => {
                ctx.install_serializer(table.get(BackendKind::Markdown)?);
                ctx.install_block_serializer(table.get(BackendKind::Html)?);
            }
        }
        Ok(())
    }

    /// One render pass: the document shell around every module, by category.
    pub(crate) fn render(
        &mut self,
        personal: Option<&PersonalData>,
        modules: &[ModuleEntry],
    ) -> Result<String, RenderError> {
        match self {
            Backend::Latex(ctx) => ctx.render_document(personal, |ctx, category| {
                run_category(modules, category, |module| module.render_latex(ctx))
            }),
            Backend::Html(ctx) => ctx.render_document(personal, |ctx, category| {
                run_category(modules, category, |module| module.render_html(ctx))
            }),
            Backend::Markdown(ctx) => ctx.render_document(personal, |ctx, category| {
                run_category(modules, category, |module| module.render_markdown(ctx))
            }),
        }
    }
}

impl From<LatexContext> for Backend {
    fn from(ctx: LatexContext) -> Self {
        Backend::Latex(ctx)
    }
}

impl From<HtmlContext> for Backend {
    fn from(ctx: HtmlContext) -> Self {
        Backend::Html(ctx)
    }
}

impl From<MarkdownContext> for Backend {
    fn from(ctx: MarkdownContext) -> Self {
        Backend::Markdown(ctx)
    }
}

/// Concatenates the output of the modules in `category`, in registration order.
fn run_category<F>(modules: &[ModuleEntry], category: &str, mut render: F) -> Result<String, RenderError>
where
    F: FnMut(&dyn Module) -> Result<String, RenderError>,
{
    let mut out = String::new();
    for entry in modules.iter().filter(|entry| entry.category == category) {
        out.push_str(&render(entry.module.as_ref())?);
    }
    Ok(out)
}
