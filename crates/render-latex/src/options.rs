use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use vitae_types::Setup;
use vitae_types::dates::DEFAULT_DATE_FORMAT;

/// Preamble and formatting configuration for the LaTeX backend.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LatexOptions {
    pub document_class: String,
    pub class_options: Vec<String>,
    pub packages: Vec<String>,
    /// Named setups, emitted as `\<name>Setup{...}` in declaration order.
    #[serde(deserialize_with = "named_setups")]
    pub setups: Vec<(String, Setup)>,
    /// Raw lines appended to the preamble.
    pub preamble: Vec<String>,
    pub date_format: String,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            document_class: "academiccv".to_string(),
            class_options: Vec::new(),
            packages: Vec::new(),
            setups: Vec::new(),
            preamble: Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

fn named_setups<'de, D>(deserializer: D) -> Result<Vec<(String, Setup)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    let mut setups = Vec::with_capacity(map.len());
    for (name, value) in map {
        let Value::Object(fields) = value else {
            return Err(serde::de::Error::custom(format!(
                "setup '{}' must be an object",
                name
            )));
        };
        let setup = Setup::from_map(&fields).map_err(serde::de::Error::custom)?;
        setups.push((name, setup));
    }
    Ok(setups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options: LatexOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, LatexOptions::default());
        assert_eq!(options.document_class, "academiccv");
        assert_eq!(options.date_format, "%d %b %Y");
    }

    #[test]
    fn test_setups_keep_declaration_order() {
        let options: LatexOptions = serde_json::from_value(json!({
            "classOptions": ["11pt"],
            "setups": {
                "title": {"vertical_space": "3em"},
                "job": {"swap": true}
            }
        }))
        .unwrap();
        assert_eq!(options.class_options, vec!["11pt".to_string()]);
        let names: Vec<&str> = options.setups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["title", "job"]);
    }

    #[test]
    fn test_scalar_setup_is_rejected() {
        let result: Result<LatexOptions, _> =
            serde_json::from_value(json!({"setups": {"title": "big"}}));
        assert!(result.is_err());
    }
}
