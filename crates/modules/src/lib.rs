//! Content modules for vitae.
//!
//! A module owns the records loaded from one key of the input document,
//! grouped by a [`GroupingStrategy`], and renders them through a fixed
//! template: section heading, introduction, then each group with its
//! optional sub-heading and records.
//!
//! Most modules are a [`GroupedModule`] over one [`Record`] type, e.g.
//! [`JobModule`]. [`TextModule`] and [`LinkModule`] hold fixed content and
//! read nothing from the input.

mod error;
pub mod grouping;
mod header;
mod module;
mod record;
pub mod records;
mod text;

pub use error::LoadError;
pub use grouping::{Group, GroupingStrategy};
pub use header::SectionHeader;
pub use module::{GroupedModule, Module};
pub use record::Record;
pub use records::{
    Award, AwardModule, ContactModule, Event, EventModule, Job, JobModule, LanguageModule, Logos,
    LogosModule, Project, ProjectModule, Publication, PublicationModule, Service, ServiceModule,
    Summary, SummaryModule, Supervision, SupervisionModule, Talk, TalkModule, Teach, TeachModule,
};
pub use text::{LinkModule, TextModule};
