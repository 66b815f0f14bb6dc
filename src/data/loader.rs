//! Load master data and scenario documents from JSON or YAML files.
//! The format is picked by file extension.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::master::{MasterData, MasterDataFile};
use crate::error::MasterDataError;

pub const DEFAULT_MASTER_DATA_PATH: &str = "data/master_data.json";
pub const MASTER_DATA_ENV: &str = "FLEETHUB_MASTER_DATA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Master data path from `FLEETHUB_MASTER_DATA`, falling back to the default.
pub fn master_data_path() -> String {
    std::env::var(MASTER_DATA_ENV).unwrap_or_else(|_| DEFAULT_MASTER_DATA_PATH.to_string())
}

pub fn parse_document<T: DeserializeOwned>(
    raw: &str,
    format: DocumentFormat,
    path: &str,
) -> Result<T, MasterDataError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(raw).map_err(|source| MasterDataError::Json {
            path: path.to_string(),
            source,
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(raw).map_err(|source| MasterDataError::Yaml {
            path: path.to_string(),
            source,
        }),
    }
}

pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, MasterDataError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| MasterDataError::UnsupportedFormat(display.clone()))?;
    let raw = fs::read_to_string(path).map_err(|source| MasterDataError::Io {
        path: display.clone(),
        source,
    })?;
    parse_document(&raw, format, &display)
}

pub fn load_master_data(path: impl AsRef<Path>) -> Result<MasterData, MasterDataError> {
    let path = path.as_ref();
    let file: MasterDataFile = load_document(path)?;
    let master = MasterData::new(file)?;
    tracing::info!(
        path = %path.display(),
        ships = master.ship_count(),
        gears = master.gear_count(),
        version = master.data_version.as_deref().unwrap_or("unversioned"),
        "master data loaded"
    );
    Ok(master)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.toml")), None);
    }

    #[test]
    fn yaml_and_json_parse_to_the_same_file() {
        let json = r#"{"gears":[{"gear_id":2,"types":[1,1,1,1,0],"firepower":2}]}"#;
        let yaml = "gears:\n  - gear_id: 2\n    types: [1, 1, 1, 1, 0]\n    firepower: 2\n";
        let a: MasterDataFile = parse_document(json, DocumentFormat::Json, "a.json").unwrap();
        let b: MasterDataFile = parse_document(yaml, DocumentFormat::Yaml, "b.yaml").unwrap();
        assert_eq!(a.gears, b.gears);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_master_data("master.toml").unwrap_err();
        assert!(matches!(err, MasterDataError::UnsupportedFormat(_)));
    }
}
