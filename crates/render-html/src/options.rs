use serde::Deserialize;
use vitae_types::dates::DEFAULT_DATE_FORMAT;

pub const ICONOIR_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/iconoir-icons/iconoir@main/css/iconoir.css";

/// Head and formatting configuration for the HTML backend.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Stylesheets linked from the head, in order.
    pub stylesheets: Vec<String>,
    pub favicon: Option<String>,
    /// Icon font used by section and contact icons.
    pub icon_stylesheet: Option<String>,
    pub date_format: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            stylesheets: Vec::new(),
            favicon: Some("./favicon.ico".to_string()),
            icon_stylesheet: Some(ICONOIR_STYLESHEET.to_string()),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_keys() {
        let options: HtmlOptions = serde_json::from_value(json!({
            "stylesheets": ["main.css"],
            "iconStylesheet": null,
            "dateFormat": "%Y"
        }))
        .unwrap();
        assert_eq!(options.stylesheets, vec!["main.css".to_string()]);
        assert_eq!(options.icon_stylesheet, None);
        assert_eq!(options.favicon.as_deref(), Some("./favicon.ico"));
        assert_eq!(options.date_format, "%Y");
    }
}
