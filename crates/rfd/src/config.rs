use crate::constants::{
    CONFIG_FILENAME, DOCS_DIR, INDEX_END_MARKER, INDEX_START_MARKER, README_FILE, TEMPLATE_FILE,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration with layered defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root directory
    pub project_root: PathBuf,

    /// Directory holding the numbered documents
    pub docs_directory: PathBuf,

    /// Template used for new documents
    pub template_file: PathBuf,

    /// Host file carrying the generated index
    pub readme_file: PathBuf,

    /// Marker line opening the generated index
    pub index_start_marker: String,

    /// Marker line closing the generated index
    pub index_end_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_root(".")
    }
}

impl Config {
    /// Built-in defaults laid out under `root`
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            project_root: root.to_path_buf(),
            docs_directory: root.join(DOCS_DIR),
            template_file: root.join(TEMPLATE_FILE),
            readme_file: root.join(README_FILE),
            index_start_marker: INDEX_START_MARKER.to_string(),
            index_end_marker: INDEX_END_MARKER.to_string(),
        }
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        // Start with defaults
        let mut config = Config::for_root(root);

        // Then <root>/.rfd.toml, if present
        if let Some(file_config) = Self::load_from_file(&config.project_root)? {
            config.merge(file_config);
        }

        Ok(config)
    }

    /// Load configuration from <root>/.rfd.toml
    fn load_from_file(root: &Path) -> Result<Option<PartialConfig>> {
        let config_path = root.join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.docs_dir {
            self.docs_directory = self.project_root.join(val);
        }
        if let Some(val) = other.template {
            self.template_file = self.project_root.join(val);
        }
        if let Some(val) = other.readme {
            self.readme_file = self.project_root.join(val);
        }
        if let Some(val) = other.index_start_marker {
            self.index_start_marker = val;
        }
        if let Some(val) = other.index_end_marker {
            self.index_end_marker = val;
        }
    }

    /// Link prefix from the host file's directory to the documents directory
    ///
    /// `rfds` for the default layout. Falls back to the documents
    /// directory's own name when it does not sit below the host file.
    pub fn link_prefix(&self) -> String {
        let host_dir = self.readme_file.parent().unwrap_or(Path::new(""));
        let relative = match self.docs_directory.strip_prefix(host_dir) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => self.docs_directory.file_name().map(PathBuf::from).unwrap_or_default(),
        };

        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    docs_dir: Option<PathBuf>,
    template: Option<PathBuf>,
    readme: Option<PathBuf>,
    index_start_marker: Option<String>,
    index_end_marker: Option<String>,
}
