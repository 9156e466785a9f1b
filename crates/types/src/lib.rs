//! Content model for the vitae renderers.
//!
//! These types are produced once from the loaded JSON tree and are read-only
//! afterwards:
//! - [`Fragment`]: a restricted-Markdown rich-text value attached to a record field
//! - [`Setup`]: an ordered key-value configuration record (LaTeX `\...Setup` blocks, per-record styles)
//! - [`PersonalData`]: the author-identity record used for titles and sidebars
//! - [`dates`]: date parsing and formatting shared by every backend

pub mod dates;
pub mod de;
pub mod fragment;
pub mod personal;
pub mod setup;

pub use fragment::{Fragment, FragmentError};
pub use personal::{Address, Contact, Language, PersonalData};
pub use setup::{Setup, SetupValue};
