use crate::options::LatexOptions;
use crate::serializer::LatexSerializer;
use std::fmt;
use std::sync::Arc;
use vitae_render_core::{BackendKind, FragmentSerializer, RenderError, category};
use vitae_types::{Contact, Fragment, PersonalData, Setup, SetupValue, dates};

const SECTION_COMMANDS: [&str; 5] = [
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "subparagraph",
];

/// Render state for one LaTeX document.
pub struct LatexContext {
    options: LatexOptions,
    serializer: Arc<dyn FragmentSerializer>,
}

impl Default for LatexContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LatexContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatexContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl LatexContext {
    pub fn new() -> Self {
        Self::with_options(LatexOptions::default())
    }

    pub fn with_options(options: LatexOptions) -> Self {
        Self {
            options,
            serializer: Arc::new(LatexSerializer),
        }
    }

    pub fn with_class_option(mut self, option: &str) -> Self {
        self.options.class_options.push(option.to_string());
        self
    }

    pub fn with_package(mut self, package: &str) -> Self {
        self.options.packages.push(package.to_string());
        self
    }

    /// Adds a `\<name>Setup{...}` block. Setting the same name twice replaces the first.
    pub fn with_setup(mut self, name: &str, setup: Setup) -> Self {
        match self.options.setups.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = setup,
            None => self.options.setups.push((name.to_string(), setup)),
        }
        self
    }

    pub fn with_preamble(mut self, line: &str) -> Self {
        self.options.preamble.push(line.to_string());
        self
    }

    pub fn with_date_format(mut self, format: &str) -> Self {
        self.options.date_format = format.to_string();
        self
    }

    pub fn options(&self) -> &LatexOptions {
        &self.options
    }

    pub fn install_serializer(&mut self, serializer: Arc<dyn FragmentSerializer>) {
        self.serializer = serializer;
    }

    pub fn fragment(&self, fragment: &Fragment) -> String {
        self.serializer.serialize(fragment)
    }

    pub fn format_date(&self, input: &str) -> String {
        dates::format_date(input, &self.options.date_format)
    }

    /// One `\tname = {value},` line.
    pub fn format_variable(&self, name: &str, value: &str) -> String {
        format!("\t{} = {{{}}},\n", name, value)
    }

    pub fn format_optional(&self, name: &str, value: Option<&str>) -> String {
        value
            .map(|value| self.format_variable(name, value))
            .unwrap_or_default()
    }

    /// Like [`Self::format_variable`], but empty fragments produce nothing.
    pub fn format_fragment(&self, name: &str, fragment: &Fragment) -> String {
        if fragment.is_empty() {
            return String::new();
        }
        self.format_variable(name, &self.fragment(fragment))
    }

    /// Serializes a setup as `before{ key = value, ... }`.
    ///
    /// Underscores in keys become hyphens, booleans are bare and nested setups recurse.
    pub fn format_setup(&self, setup: &Setup, before: &str, indent: usize, comma: bool) -> String {
        let pad = "\t".repeat(indent);
        let mut out = format!("{}{}{{\n", pad, before);
        for (key, value) in setup.entries() {
            let key = key.replace('_', "-");
            match value {
                SetupValue::Bool(b) => out.push_str(&format!("{}\t{} = {},\n", pad, key, b)),
                SetupValue::Text(text) => {
                    out.push_str(&format!("{}\t{} = {{{}}},\n", pad, key, text))
                }
                SetupValue::Nested(inner) => {
                    out.push_str(&self.format_setup(inner, &format!("{} = ", key), indent + 1, true))
                }
            }
        }
        out.push_str(&pad);
        out.push('}');
        if comma {
            out.push(',');
        }
        out.push('\n');
        out
    }

    /// The per-record `style = {...},` entry.
    pub fn format_style(&self, style: Option<&Setup>) -> String {
        style
            .map(|style| self.format_setup(style, "style = ", 1, true))
            .unwrap_or_default()
    }

    /// Wraps a record body in its command: `\name{ ... }`.
    pub fn record(&self, command: &str, body: &str) -> String {
        format!("\\{}{{\n{}}}\n", command, body)
    }

    /// Sectioning command for `level`. Level 0 or an empty name yields nothing.
    pub fn open_section(&self, level: u8, name: &str) -> Result<String, RenderError> {
        if level == 0 || name.is_empty() {
            return Ok(String::new());
        }
        let command = SECTION_COMMANDS
            .get(usize::from(level) - 1)
            .ok_or(RenderError::InvalidHeadingLevel {
                backend: BackendKind::Latex,
                level,
            })?;
        Ok(format!("\\{}{{{}}}\n\n", command, name))
    }

    /// Contact details as title key-values.
    pub fn contact_fields(&self, contact: &Contact) -> String {
        let mut out = String::new();
        for email in &contact.email {
            out.push_str(&self.format_variable("email", email));
        }
        out.push_str(&self.format_optional("website", contact.website.as_deref()));
        out.push_str(&self.format_optional("github", contact.github.as_deref()));
        out.push_str(&self.format_optional("orcid", contact.orcid.as_deref()));
        out.push_str(&self.format_optional("linkedIn", contact.linkedin.as_deref()));
        if let Some(address) = &contact.address {
            out.push_str(&self.format_variable("street", &address.street));
            out.push_str(&self.format_variable("zipcode", &address.zipcode));
            out.push_str(&self.format_variable("city", &address.city));
            out.push_str(&self.format_variable("country", &address.country));
        }
        out
    }

    /// Assembles the whole document.
    ///
    /// `run_category` renders the modules registered under a category; it is
    /// asked for [`category::TITLE`] inside the title block and for
    /// [`category::DEFAULT`] for the body.
    pub fn render_document<F>(
        &mut self,
        personal: Option<&PersonalData>,
        mut run_category: F,
    ) -> Result<String, RenderError>
    where
        F: FnMut(&mut Self, &str) -> Result<String, RenderError>,
    {
        let mut latex = if self.options.class_options.is_empty() {
            format!("\\documentclass{{{}}}\n\n", self.options.document_class)
        } else {
            format!(
                "\\documentclass[{}]{{{}}}\n\n",
                self.options.class_options.join(", "),
                self.options.document_class
            )
        };

        for package in &self.options.packages {
            latex.push_str(&format!("\\usepackage{{{}}}\n", package));
        }

        for (name, setup) in &self.options.setups {
            latex.push_str(&self.format_setup(setup, &format!("\\{}Setup", name), 0, false));
            latex.push('\n');
        }

        for line in &self.options.preamble {
            latex.push_str(line);
            latex.push('\n');
        }

        latex.push_str("\\begin{document}\n");
        if let Some(personal) = personal {
            latex.push_str("\\makecvtitle{\n");
            latex.push_str(&self.format_variable("author", &personal.name));
            latex.push_str(&self.format_variable("position", &personal.position));
            latex.push_str(&self.format_variable("organization", &personal.organization));
            latex.push_str(&self.format_optional("photo", personal.photo.as_deref()));
            latex.push_str(&self.contact_fields(&personal.contact));
            latex.push_str(&run_category(self, category::TITLE)?);
            latex.push_str("}\n\n");
        }
        latex.push_str(&run_category(self, category::DEFAULT)?);
        latex.push_str("\\end{document}");

        Ok(latex)
    }
}
