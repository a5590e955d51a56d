//! `manifest.json` — the document at the root of every project and template.
//!
//! Only `name` has meaning here. Every other key is carried through
//! untouched, in its original order.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{io_err, OrbyError};
use crate::fs::write_atomic;

/// File name of the manifest inside a project or template directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Description reported for a template whose manifest does not parse.
pub const INVALID_MANIFEST_DESCRIPTION: &str = "Invalid manifest.json";

/// A parsed manifest: a JSON object with at least a `name` field once validated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// `<dir>/manifest.json` — pure, no I/O.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    /// Read and parse `<dir>/manifest.json`.
    ///
    /// Returns `ManifestNotFound` if the file is absent, `Parse` if it is not
    /// valid JSON and `ManifestNotObject` if the top level is not an object.
    pub fn load(dir: &Path) -> Result<Self, OrbyError> {
        let path = Self::path_in(dir);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OrbyError::ManifestNotFound {
                    dir: dir.to_path_buf(),
                })
            }
            Err(e) => return Err(io_err(&path, e)),
        };
        Self::parse(&path, &contents)
    }

    /// Parse manifest text; `path` is only used for error context.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, OrbyError> {
        let value: Value = serde_json::from_str(contents).map_err(|e| OrbyError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(OrbyError::ManifestNotObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// The `name` field, or `ManifestNameMissing` naming the manifest at `dir`.
    pub fn require_name(&self, dir: &Path) -> Result<&str, OrbyError> {
        self.name().ok_or_else(|| OrbyError::ManifestNameMissing {
            path: Self::path_in(dir),
        })
    }

    /// Overwrite (or insert) `name`, keeping its position among the other keys.
    pub fn set_name(&mut self, name: &str) {
        self.fields
            .insert("name".to_owned(), Value::String(name.to_owned()));
    }

    /// The `description` field, or `""`.
    pub fn description(&self) -> &str {
        self.fields
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Pretty JSON with 4-space indentation; non-ASCII is written verbatim.
    pub fn to_pretty_json(&self) -> Result<String, OrbyError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.fields.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write this manifest to `<dir>/manifest.json`, replacing any existing one.
    pub fn save(&self, dir: &Path) -> Result<(), OrbyError> {
        let json = self.to_pretty_json()?;
        write_atomic(&Self::path_in(dir), json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(s: &str) -> Result<Manifest, OrbyError> {
        Manifest::parse(Path::new("manifest.json"), s)
    }

    #[test]
    fn set_name_keeps_other_fields_and_order() {
        let mut m = parse(r#"{"version":"1.0","name":"old","description":"d","extra":[1,2]}"#)
            .unwrap();
        m.set_name("new");
        let keys: Vec<&str> = m.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["version", "name", "description", "extra"]);
        assert_eq!(m.name(), Some("new"));
        assert_eq!(m.get("extra"), Some(&serde_json::json!([1, 2])));
    }

    #[test]
    fn non_string_name_counts_as_missing() {
        let m = parse(r#"{"name": 42}"#).unwrap();
        let err = m.require_name(Path::new("/p")).unwrap_err();
        assert!(matches!(err, OrbyError::ManifestNameMissing { .. }));
        assert!(err.to_string().contains("`name`"));
    }

    #[test]
    fn description_defaults_to_empty() {
        assert_eq!(parse(r#"{"name":"x"}"#).unwrap().description(), "");
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, OrbyError::ManifestNotObject { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::MalformedData);
    }

    #[test]
    fn load_missing_manifest_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = Manifest::load(tmp.path()).unwrap_err();
        assert!(matches!(err, OrbyError::ManifestNotFound { .. }));
    }

    #[test]
    fn save_writes_four_space_indent_and_raw_unicode() {
        let tmp = TempDir::new().unwrap();
        let mut m = Manifest::default();
        m.set_name("Приложение");
        m.save(tmp.path()).unwrap();
        let text = std::fs::read_to_string(Manifest::path_in(tmp.path())).unwrap();
        assert_eq!(text, "{\n    \"name\": \"Приложение\"\n}");
        assert_eq!(Manifest::load(tmp.path()).unwrap(), m);
    }
}
