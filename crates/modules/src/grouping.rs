//! Turning a module's input into ordered groups of records.

use crate::error::LoadError;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A labeled or unlabeled ordered bucket of records.
///
/// Unlabeled groups are rendered without a sub-heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<R> {
    pub label: Option<String>,
    pub records: Vec<R>,
}

impl<R> Group<R> {
    pub fn new(label: Option<&str>, records: Vec<R>) -> Self {
        Self {
            label: label.map(str::to_string),
            records,
        }
    }

    pub fn unlabeled(records: Vec<R>) -> Self {
        Self::new(None, records)
    }
}

/// How a module's input is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// An object with an `"order"` list of labels and one record list per label.
    Declared,
    /// A record list grouped by year, most recent first.
    Chronological,
    /// A record list kept as one unlabeled group.
    Flat,
    /// The whole input is a single record.
    Single,
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn parse_record<R: DeserializeOwned>(module: &str, value: &Value) -> Result<R, LoadError> {
    R::deserialize(value).map_err(|source| LoadError::InvalidRecord {
        module: module.to_string(),
        source,
    })
}

/// Loads a list of records, keeping input order.
pub fn load_records<R: DeserializeOwned>(module: &str, value: &Value) -> Result<Vec<R>, LoadError> {
    let Value::Array(items) = value else {
        return Err(LoadError::UnexpectedShape {
            module: module.to_string(),
            expected: "a list of records",
            found: value_kind(value),
        });
    };
    items.iter().map(|item| parse_record(module, item)).collect()
}

/// Groups in the order the author declared.
///
/// Keys present in the input but absent from `"order"` are ignored.
pub fn group_declared<R: DeserializeOwned>(
    module: &str,
    value: &Value,
) -> Result<Vec<Group<R>>, LoadError> {
    let Value::Object(map) = value else {
        return Err(LoadError::UnexpectedShape {
            module: module.to_string(),
            expected: "an object with an \"order\" key",
            found: value_kind(value),
        });
    };
    let order = map.get("order").ok_or_else(|| LoadError::MissingOrder {
        module: module.to_string(),
    })?;
    let Value::Array(labels) = order else {
        return Err(LoadError::UnexpectedShape {
            module: module.to_string(),
            expected: "a list of subsection names under \"order\"",
            found: value_kind(order),
        });
    };

    let mut groups = Vec::with_capacity(labels.len());
    for label in labels {
        let Value::String(label) = label else {
            return Err(LoadError::UnexpectedShape {
                module: module.to_string(),
                expected: "a subsection name",
                found: value_kind(label),
            });
        };
        let records = map.get(label).ok_or_else(|| LoadError::MissingGroup {
            module: module.to_string(),
            label: label.clone(),
        })?;
        groups.push(Group::new(Some(label), load_records(module, records)?));
    }
    Ok(groups)
}

/// Groups by year, most recent first, keeping input order inside a year.
///
/// Records without a usable year go last, in one unlabeled group.
pub fn group_chronological<R, F>(records: Vec<R>, year: F) -> Vec<Group<R>>
where
    F: Fn(&R) -> Option<i32>,
{
    let mut by_year = records.into_iter().into_group_map_by(|record| year(record));
    let undated = by_year.remove(&None);

    let mut groups: Vec<Group<R>> = by_year
        .into_iter()
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|(year, records)| Group {
            label: year.map(|year| year.to_string()),
            records,
        })
        .collect();

    if let Some(records) = undated {
        log::debug!(
            "{} record(s) without a usable date placed in the trailing group",
            records.len()
        );
        groups.push(Group::unlabeled(records));
    }
    groups
}

/// Applies `strategy` to a module's input.
pub fn group_input<R, F>(
    module: &str,
    strategy: GroupingStrategy,
    value: &Value,
    year: F,
) -> Result<Vec<Group<R>>, LoadError>
where
    R: DeserializeOwned,
    F: Fn(&R) -> Option<i32>,
{
    match strategy {
        GroupingStrategy::Declared => group_declared(module, value),
        GroupingStrategy::Chronological => {
            Ok(group_chronological(load_records(module, value)?, year))
        }
        GroupingStrategy::Flat => Ok(vec![Group::unlabeled(load_records(module, value)?)]),
        GroupingStrategy::Single => Ok(vec![Group::unlabeled(vec![parse_record(module, value)?])]),
    }
}
