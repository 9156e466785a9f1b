//! Record types and the modules built on them.

mod award;
mod contact;
mod event;
mod job;
mod language;
mod logos;
mod project;
mod publication;
mod service;
mod summary;
mod supervision;
mod talk;
mod teach;

use crate::module::GroupedModule;
use vitae_types::{Contact, Language};

pub use award::Award;
pub use event::Event;
pub use job::Job;
pub use logos::Logos;
pub use project::Project;
pub use publication::Publication;
pub use service::Service;
pub use summary::Summary;
pub use supervision::Supervision;
pub use talk::Talk;
pub use teach::Teach;

pub type AwardModule = GroupedModule<Award>;
pub type ContactModule = GroupedModule<Contact>;
pub type EventModule = GroupedModule<Event>;
pub type JobModule = GroupedModule<Job>;
pub type LanguageModule = GroupedModule<Language>;
pub type LogosModule = GroupedModule<Logos>;
pub type ProjectModule = GroupedModule<Project>;
pub type PublicationModule = GroupedModule<Publication>;
pub type ServiceModule = GroupedModule<Service>;
pub type SummaryModule = GroupedModule<Summary>;
pub type SupervisionModule = GroupedModule<Supervision>;
pub type TalkModule = GroupedModule<Talk>;
pub type TeachModule = GroupedModule<Teach>;
