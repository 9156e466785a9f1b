use crate::backend::{Backend, ModuleEntry};
use crate::error::BuildError;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use vitae_modules::Module;
use vitae_render_core::{BackendKind, FragmentSerializer, RenderError, SerializerTable, category};
use vitae_render_html::HtmlSerializer;
use vitae_render_latex::LatexSerializer;
use vitae_render_markdown::MarkdownSerializer;
use vitae_types::PersonalData;

#[cfg(feature = "parallel-render")]
use rayon::prelude::*;

/// Key the personal data is read from unless configured otherwise.
pub const DEFAULT_PERSONAL_KEY: &str = "personal";

/// The output of one backend's render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub backend: BackendKind,
    pub content: String,
}

/// Collects modules and backends, then loads the input and renders every backend.
///
/// ```ignore
/// let mut builder = Builder::new()
///     .register_default_module(Some("jobs"), Box::new(JobModule::new()))
///     .register_backend(HtmlContext::new());
/// let documents = builder.build(&input)?;
/// ```
pub struct Builder {
    modules: Vec<ModuleEntry>,
    backends: Vec<Backend>,
    personal_key: String,
    serializers: SerializerTable,
}

impl Default for Builder {
    fn default() -> Self {
        let serializers = SerializerTable::new()
            .with(Arc::new(LatexSerializer))
            .with(Arc::new(HtmlSerializer))
            .with(Arc::new(MarkdownSerializer));
        Self {
            modules: Vec::new(),
            backends: Vec::new(),
            personal_key: DEFAULT_PERSONAL_KEY.to_string(),
            serializers,
        }
    }
}

impl Builder {
    /// Creates a builder with the stock fragment serializers for every backend.
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a module under `category`.
    ///
    /// The module is loaded from `load_key` in the input; `None` means it is never loaded.
    pub fn register_module(
        mut self,
        load_key: Option<&str>,
        module: Box<dyn Module>,
        category: &str,
    ) -> Self {
        self.modules.push(ModuleEntry {
            load_key: load_key.map(str::to_string),
            module,
            category: category.to_string(),
        });
        self
    }

    /// Registers a module in the default category.
    pub fn register_default_module(self, load_key: Option<&str>, module: Box<dyn Module>) -> Self {
        self.register_module(load_key, module, category::DEFAULT)
    }

    /// Adds a backend. Documents are returned in registration order.
    pub fn register_backend(mut self, backend: impl Into<Backend>) -> Self {
        self.backends.push(backend.into());
        self
    }

    pub fn with_personal_key(mut self, key: &str) -> Self {
        self.personal_key = key.to_string();
        self
    }

    /// Replaces the fragment serializer for the serializer's backend.
    pub fn with_serializer(mut self, serializer: Arc<dyn FragmentSerializer>) -> Self {
        self.serializers.register(serializer);
        self
    }

    pub fn backends(&self) -> impl Iterator<Item = BackendKind> + '_ {
        self.backends.iter().map(Backend::kind)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Loads `input` into the registered modules and runs one render pass per backend.
    ///
    /// A module whose key is absent from `input` stays empty. The first load or
    /// render error aborts the build.
    pub fn build(&mut self, input: &Value) -> Result<Vec<RenderedDocument>, BuildError> {
        let personal = self.load_personal(input)?;
        self.load_modules(input)?;

        for backend in &mut self.backends {
            backend.install_serializers(&self.serializers)?;
        }

        let personal = personal.as_ref();
        let modules = self.modules.as_slice();

        #[cfg(feature = "parallel-render")]
        let documents: Result<Vec<RenderedDocument>, RenderError> = self
            .backends
            .par_iter_mut()
            .map(|backend| render_pass(backend, personal, modules))
            .collect();

        #[cfg(not(feature = "parallel-render"))]
        let documents: Result<Vec<RenderedDocument>, RenderError> = self
            .backends
            .iter_mut()
            .map(|backend| render_pass(backend, personal, modules))
            .collect();

        Ok(documents?)
    }

    fn load_personal(&self, input: &Value) -> Result<Option<PersonalData>, BuildError> {
        let Some(value) = input.get(&self.personal_key) else {
            log::debug!("No personal data under '{}'", self.personal_key);
            return Ok(None);
        };
        PersonalData::deserialize(value)
            .map(Some)
            .map_err(|source| BuildError::InvalidPersonalData {
                key: self.personal_key.clone(),
                source,
            })
    }

    fn load_modules(&mut self, input: &Value) -> Result<(), BuildError> {
        for entry in &mut self.modules {
            let Some(key) = entry.load_key.as_deref() else {
                continue;
            };
            match input.get(key) {
                Some(value) => entry.module.load(value)?,
                None => log::debug!(
                    "Key '{}' not found, module '{}' stays empty",
                    key,
                    entry.module.header().section
                ),
            }
        }
        Ok(())
    }
}

fn render_pass(
    backend: &mut Backend,
    personal: Option<&PersonalData>,
    modules: &[ModuleEntry],
) -> Result<RenderedDocument, RenderError> {
    let kind = backend.kind();
    log::info!("Starting {} render pass", kind);
    let start = Instant::now();
    let content = backend.render(personal, modules)?;
    log::info!(
        "Finished {} render pass in {:.2?} ({} bytes)",
        kind,
        start.elapsed(),
        content.len()
    );
    Ok(RenderedDocument { backend: kind, content })
}
