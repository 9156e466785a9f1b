use slug::slugify;
use vitae_types::Fragment;

/// What a module renders before its records.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// Heading level. 0 renders the module without a section.
    pub level: u8,
    pub section: String,
    pub icon: Option<String>,
    pub introduction: Fragment,
    class: Option<String>,
}

impl SectionHeader {
    pub fn new(level: u8, section: &str) -> Self {
        Self {
            level,
            section: section.to_string(),
            icon: None,
            introduction: Fragment::absent(),
            class: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_introduction(mut self, introduction: impl Into<Fragment>) -> Self {
        self.introduction = introduction.into();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Class for structural tags: the override, or a slug of the section name.
    pub fn class(&self) -> String {
        match &self.class {
            Some(class) => class.clone(),
            None => slugify(&self.section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_is_slug_of_section() {
        assert_eq!(SectionHeader::new(1, "Work Experience").class(), "work-experience");
        assert_eq!(SectionHeader::new(1, "Talks & Posters").class(), "talks-posters");
    }

    #[test]
    fn test_class_override() {
        let header = SectionHeader::new(1, "Work Experience").with_class("work");
        assert_eq!(header.class(), "work");
    }
}
