use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Vertex;

/// Settings read from a `polycentroid.toml` file. Every field is optional;
/// command-line flags take precedence over anything set here.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub vertices: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub precision: Option<u8>,
}

impl FileConfig {
    /// Load the first parseable config file from the search path
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file. Unlike [`FileConfig::load`],
    /// a missing or malformed file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn vertices(&self) -> Option<Vec<Vertex>> {
        self.vertices
            .as_ref()
            .map(|coords| coords.iter().copied().map(Vertex::from).collect())
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polycentroid.toml"));
    paths.push(PathBuf::from(".polycentroid.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polycentroid").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polycentroid.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_path_full() {
        let file = write_config(
            r#"
vertices = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
verbose = true
json = true
precision = 4
"#,
        );
        let config = FileConfig::from_path(file.path()).unwrap();

        assert!(config.verbose);
        assert!(config.json);
        assert_eq!(config.precision, Some(4));
        assert_eq!(
            config.vertices(),
            Some(vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(1.0, 0.0),
                Vertex::new(0.0, 1.0)
            ])
        );
    }

    #[test]
    fn test_from_path_defaults() {
        let file = write_config("");
        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.vertices(), None);
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_from_path_malformed() {
        let file = write_config("vertices = [[0.0, \"a\"]]");
        assert!(FileConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn test_config_paths_start_in_working_dir() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("polycentroid.toml"));
        assert_eq!(paths[1], PathBuf::from(".polycentroid.toml"));
    }
}
