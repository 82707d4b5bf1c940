//! JSON documents

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use serde_yaml::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::error::{FileIoError, Result};
use crate::mapping::{Mapping, Rejected};

/// Indentation used for every JSON file we write
const INDENT: &[u8] = b"    ";

/// A float JSON has no literal for
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{value} at {location} cannot be written as JSON")]
pub struct NonFiniteNumber {
    /// Where the value sits, e.g. `$.metrics.rmse` or `$.losses[3]`
    pub location: String,
    pub value: f64,
}

/// Write `data` as pretty-printed JSON (4-space indent).
///
/// NaN and infinite floats are rejected with [`FileIoError::Write`] before the
/// file is opened, so an existing file is left as it was.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();

    let tree = serde_yaml::to_value(data).map_err(|e| FileIoError::write(path, e))?;
    if let Some(bad) = find_non_finite(&tree, "$") {
        return Err(FileIoError::write(path, bad));
    }

    let file = File::create(path).map_err(|e| FileIoError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)
        .map_err(|e| FileIoError::write(path, e))?;
    writer.flush().map_err(|e| FileIoError::write(path, e))?;

    info!("json file saved at: {}", path.display());
    Ok(())
}

/// First NaN or infinity in document order
fn find_non_finite(value: &Value, location: &str) -> Option<NonFiniteNumber> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| !f.is_finite())
            .map(|value| NonFiniteNumber {
                location: location.to_string(),
                value,
            }),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &format!("{}[{}]", location, i))),
        Value::Mapping(entries) => entries.iter().find_map(|(key, item)| {
            find_non_finite(item, &format!("{}.{}", location, key_label(key)))
        }),
        Value::Tagged(tagged) => find_non_finite(&tagged.value, location),
        Value::Null | Value::Bool(_) | Value::String(_) => None,
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => "<key>".to_string(),
    }
}

/// Read a JSON object into a [`Mapping`].
///
/// Blank files, `null` and `{}` are [`FileIoError::EmptyContent`]; every other
/// failure is [`FileIoError::Read`].
pub fn load_json(path: impl AsRef<Path>) -> Result<Mapping> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| FileIoError::read(path, e))?;
    if text.trim().is_empty() {
        return Err(FileIoError::empty(path));
    }

    let value: Value = serde_json::from_str(&text).map_err(|e| FileIoError::read(path, e))?;
    let mapping = match Mapping::try_from_value(value) {
        Ok(mapping) => mapping,
        Err(Rejected::Empty) => return Err(FileIoError::empty(path)),
        Err(rejected) => return Err(FileIoError::read(path, rejected)),
    };

    info!("json file loaded successfully from: {}", path.display());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::captured;
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_matches_input() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scores.json");

        let scores = json!({"rmse": 0.42, "mae": 0.31, "r2": 0.87, "model": "elasticnet"});
        save_json(&path, &scores).unwrap();

        let loaded = load_json(&path).unwrap();
        assert_eq!(serde_json::to_value(&loaded).unwrap(), scores);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");

        let mut data = BTreeMap::new();
        data.insert("key", "value");
        save_json(&path, &data).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"key\": \"value\"\n}");
    }

    #[test]
    fn test_mapping_round_trips_through_save() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("first.json");
        let second = tmp.path().join("second.json");

        save_json(&first, &json!({"a": {"b": [1, 2, 3]}})).unwrap();
        let mapping = load_json(&first).unwrap();
        save_json(&second, &mapping).unwrap();

        assert_eq!(load_json(&second).unwrap(), mapping);
    }

    #[test]
    fn test_empty_null_and_blank() {
        let tmp = TempDir::new().unwrap();
        for (name, content) in [("blank.json", "  \n"), ("null.json", "null"), ("obj.json", "{}")] {
            let path = tmp.path().join(name);
            fs::write(&path, content).unwrap();
            assert_eq!(
                load_json(&path).unwrap_err().kind(),
                ErrorKind::EmptyContent,
                "{name}"
            );
        }
    }

    #[test]
    fn test_malformed_keeps_parser_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{\"a\": }").unwrap();

        let err = load_json(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.cause::<serde_json::Error>().unwrap().is_syntax());
    }

    #[test]
    fn test_array_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("array.json");
        fs::write(&path, "[1, 2]").unwrap();

        assert_eq!(load_json(&path).unwrap_err().kind(), ErrorKind::Read);
    }

    #[test]
    fn test_save_into_missing_dir_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no/such/dir/out.json");

        let err = save_json(&path, &json!({"a": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(err.cause::<std::io::Error>().is_some());
    }

    #[test]
    fn test_non_finite_float_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("metrics.json");

        let mut metrics = BTreeMap::new();
        metrics.insert("mae", 0.31);
        metrics.insert("rmse", f64::INFINITY);

        let err = save_json(&path, &metrics).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        let bad = err.cause::<NonFiniteNumber>().unwrap();
        assert_eq!(bad.location, "$.rmse");
        assert!(!path.exists());
    }

    #[test]
    fn test_nan_in_nested_list_leaves_existing_file() {
        #[derive(Serialize)]
        struct History {
            losses: Vec<f64>,
        }

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("history.json");
        fs::write(&path, "{\"losses\": []}").unwrap();

        let history = History {
            losses: vec![0.9, 0.5, f64::NAN],
        };
        let err = save_json(&path, &history).unwrap_err();

        assert_eq!(err.cause::<NonFiniteNumber>().unwrap().location, "$.losses[2]");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"losses\": []}");
    }

    #[test]
    fn test_logs_one_line_on_success_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scores.json");

        let (result, lines) = captured(|| save_json(&path, &json!({"rmse": 0.42})));
        result.unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(&path.display().to_string()));

        let missing = tmp.path().join("absent.json");
        let (result, lines) = captured(|| load_json(&missing));
        assert!(result.is_err());
        assert!(lines.is_empty());
    }
}
