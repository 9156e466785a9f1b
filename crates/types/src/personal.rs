//! The author-identity record and the contact details it carries.

use crate::de::{one_or_many, string_or_number};
use crate::fragment::Fragment;
use serde::Deserialize;

/// A postal address.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    #[serde(deserialize_with = "string_or_number")]
    pub zipcode: String,
    pub city: String,
    pub country: String,
    /// Optional map link used by the HTML sidebar.
    #[serde(default)]
    pub link: Option<String>,
}

impl Address {
    /// Single-line form: `street, zipcode, city, country`.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.zipcode, self.city, self.country
        )
    }
}

/// Ways to reach the author.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "one_or_many")]
    pub email: Vec<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub orcid: Option<String>,
    pub linkedin: Option<String>,
    pub address: Option<Address>,
    /// Link to a downloadable CV.
    pub pdf: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.website.is_none()
            && self.github.is_none()
            && self.orcid.is_none()
            && self.linkedin.is_none()
            && self.address.is_none()
            && self.pdf.is_none()
    }
}

/// A spoken language and the author's proficiency.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Language {
    pub name: Fragment,
    pub level: Fragment,
}

/// The singleton record identifying the author of the document.
///
/// It is not owned by any module: the builder loads it once per build and
/// hands it to each backend for the title block or the sidebar.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalData {
    pub name: String,
    pub position: String,
    pub organization: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub contact: Contact,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl PersonalData {
    pub fn new(name: &str, position: &str, organization: &str) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            organization: organization.to_string(),
            photo: None,
            contact: Contact::default(),
            languages: Vec::new(),
        }
    }

    pub fn with_photo(mut self, photo: &str) -> Self {
        self.photo = Some(photo.to_string());
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }
}
