//! # vitae
//!
//! Renders one curriculum vitae, described as a JSON document, into LaTeX,
//! HTML and Markdown.
//!
//! - **types**: fragments, setups and personal data
//! - **render**: the three backend contexts and their fragment serializers
//! - **modules**: record types and the modules that group and render them
//! - **core**: the [`Builder`] that loads the input and runs the render passes
//!
//! ```ignore
//! use vitae::{Builder, HtmlContext, JobModule};
//!
//! let mut builder = Builder::new()
//!     .register_default_module(Some("jobs"), Box::new(JobModule::new()))
//!     .register_backend(HtmlContext::new());
//! let documents = builder.build(&input)?;
//! ```

// Re-export workspace crates
pub use vitae_core as core;
pub use vitae_modules as modules;
pub use vitae_render_core as render;
pub use vitae_types as types;

pub use serde_json;

// Orchestration
pub use vitae_core::{Backend, BuildError, Builder, DEFAULT_PERSONAL_KEY, RenderedDocument};

// Backends
pub use vitae_render_core::{BackendKind, FragmentSerializer, RenderError, SerializerTable, category};
pub use vitae_render_html::{HtmlContext, HtmlOptions, HtmlSerializer, MarkupWriter};
pub use vitae_render_latex::{LatexContext, LatexOptions, LatexSerializer};
pub use vitae_render_markdown::{MarkdownContext, MarkdownOptions, MarkdownSerializer};

// Content
pub use vitae_modules::{
    Award, AwardModule, ContactModule, Event, EventModule, Group, GroupedModule, GroupingStrategy,
    Job, JobModule, LanguageModule, LinkModule, LoadError, Logos, LogosModule, Module, Project,
    ProjectModule, Publication, PublicationModule, Record, SectionHeader, Service, ServiceModule,
    Summary, SummaryModule, Supervision, SupervisionModule, Talk, TalkModule, Teach, TeachModule,
    TextModule,
};
pub use vitae_types::{Address, Contact, Fragment, Language, PersonalData, Setup, SetupValue};
