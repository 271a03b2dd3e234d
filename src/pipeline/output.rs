//! JSON output for the dashboard
//!
//! Documents are written compactly with UTF-8 text left unescaped. Numbers are
//! sanitized first: non-finite values become `null` and whole floats are
//! written as integers to keep the files small.

use serde::Serialize;
use serde_json::{Number, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

/// 2^63: whole floats at or beyond this no longer fit an `i64`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A document written by [`write_json`]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WrittenFile {
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Recursively replace non-finite numbers with `null` and whole floats with integers
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64().map_or(Value::Null, sanitize_float),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, sanitize(v))).collect()),
        other => other,
    }
}

fn sanitize_float(f: f64) -> Value {
    if !f.is_finite() {
        return Value::Null;
    }
    if f.fract() == 0.0 && f.abs() < I64_LIMIT {
        return Value::Number(Number::from(f as i64));
    }
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}

/// Serialize `data` to compact, sanitized JSON bytes
pub fn to_compact_json<T: Serialize + ?Sized>(data: &T) -> Result<Vec<u8>> {
    let value = sanitize(serde_json::to_value(data)?);
    Ok(serde_json::to_vec(&value)?)
}

/// Write `data` to `output_dir/file_name` and report its size
pub fn write_json<T: Serialize + ?Sized>(output_dir: &Path, file_name: &str, data: &T) -> Result<WrittenFile> {
    let path = output_dir.join(file_name);
    let bytes = to_compact_json(data)?;
    fs::write(&path, &bytes)?;

    let size_mb = bytes.len() as f64 / (1024.0 * 1024.0);
    info!("  -> {}  ({:.2} MB)", file_name, size_mb);

    Ok(WrittenFile {
        name: file_name.to_string(),
        path,
        bytes: bytes.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_floats_become_integers() {
        let out = to_compact_json(&json!({"sales": 12.0, "avg": 10.5, "n": 3})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"{"avg":10.5,"n":3,"sales":12}"#);
    }

    #[test]
    fn test_non_finite_become_null() {
        let data = vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -2.0];
        let out = to_compact_json(&data).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[null,null,null,-2]");
    }

    #[test]
    fn test_nested_values_sanitized() {
        let value = json!({"a": [{"b": 1.0}, [2.5, 3.0]], "s": "x"});
        assert_eq!(sanitize(value), json!({"a": [{"b": 1}, [2.5, 3]], "s": "x"}));
    }

    #[test]
    fn test_huge_whole_float_kept_as_float() {
        assert!(sanitize(json!(1e300)).is_f64());
    }

    #[test]
    fn test_multibyte_text_unescaped() {
        let out = to_compact_json(&json!({"titleJP": "俺だけレベルアップな件"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"{"titleJP":"俺だけレベルアップな件"}"#);
    }

    #[test]
    fn test_write_json_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_json(dir.path(), "out.json", &json!([1.0, 2.0])).unwrap();
        assert_eq!(written.bytes, 5);
        assert_eq!(fs::read_to_string(dir.path().join("out.json")).unwrap(), "[1,2]");
    }
}
