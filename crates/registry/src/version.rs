// crates/registry/src/version.rs

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};

/// One entry of a registry version listing.
///
/// Only `id` and `name` are required; `name` is the version identifier the
/// globs are matched against (e.g. `1.1.3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl PackageVersion {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
            package_html_url: None,
            html_url: None,
            created_at: None,
            updated_at: None,
            metadata: None,
        }
    }
}

/// How candidate versions are supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// One identifier per line; blank lines are skipped and ids are assigned
    /// by position, starting at 1.
    #[default]
    Lines,
    /// A JSON array of [`PackageVersion`] objects, as returned by the
    /// registry's version listing.
    Json,
}

/// Read candidate versions, keeping their order.
pub fn parse_versions<R: Read>(reader: R, format: InputFormat) -> Result<Vec<PackageVersion>> {
    match format {
        InputFormat::Json => Ok(serde_json::from_reader(reader)?),
        InputFormat::Lines => {
            let mut out = Vec::new();
            for line in BufReader::new(reader).lines() {
                let line = line?;
                let name = line.trim();
                if name.is_empty() {
                    continue;
                }
                let id = out.len() as u64 + 1;
                out.push(PackageVersion::new(id, name));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_skip_blanks_and_number_by_position() {
        let input = "1.0.0\n\n  2.0.0-rc1 \r\n1.0.0\n";
        let versions = parse_versions(input.as_bytes(), InputFormat::Lines).unwrap();
        let names: Vec<&str> = versions.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["1.0.0", "2.0.0-rc1", "1.0.0"]);
        let ids: Vec<u64> = versions.iter().map(|v| v.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn json_listing_with_extra_fields() {
        let input = r#"[
            {"id": 11, "name": "1.0.0", "url": "https://api.example/v/11",
             "created_at": "2024-01-02T03:04:05Z", "metadata": {"package_type": "nuget"},
             "license": "MIT"},
            {"id": 12, "name": "1.0.1"}
        ]"#;
        let versions = parse_versions(input.as_bytes(), InputFormat::Json).unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].id, 11);
        assert_eq!(versions[0].created_at.as_deref(), Some("2024-01-02T03:04:05Z"));
        assert_eq!(versions[0].metadata.as_ref().unwrap()["package_type"], "nuget");
        assert_eq!(versions[1], PackageVersion::new(12, "1.0.1"));
    }

    #[test]
    fn json_requires_name() {
        let err = parse_versions(r#"[{"id": 1}]"#.as_bytes(), InputFormat::Json).unwrap_err();
        assert!(matches!(err, crate::RegistryError::Json(_)));
    }
}
