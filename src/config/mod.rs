//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, matching, output_formats};
use crate::core::error::{RelinkError, Result};
use crate::discovery::finder::MatchMode;
use crate::relocate::RelocateOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File name suffixes scanned for include references (e.g. ".c", "h")
    pub extensions: Option<Vec<String>>,

    /// How include tokens are compared to the moved file (basename, full-path)
    pub match_mode: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Some(
                files::DEFAULT_EXTENSIONS
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
            ),
            match_mode: Some(matching::DEFAULT.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RelinkError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            RelinkError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config.with_defaults())
    }

    /// Config file paths searched, nearest first: `start`, then up to three parents.
    pub fn standard_locations(start: &Path) -> Vec<PathBuf> {
        start
            .ancestors()
            .take(files::CONFIG_SEARCH_DEPTH + 1)
            .map(|dir| dir.join(files::CONFIG_FILE_NAME))
            .collect()
    }

    /// Load the nearest config file above `start`, falling back to defaults.
    ///
    /// A config file that exists but cannot be parsed is an error rather than
    /// silently ignored.
    pub fn load_from_standard_locations(start: &Path) -> Result<Self> {
        for candidate in Self::standard_locations(start) {
            if candidate.is_file() {
                log::debug!("Using config file {}", candidate.display());
                return Self::load_from_file(candidate);
            }
        }

        Ok(Self::default())
    }

    /// Fill fields a config file left out with their defaults
    fn with_defaults(self) -> Self {
        let defaults = Self::default();
        Self {
            extensions: self.extensions.or(defaults.extensions),
            match_mode: self.match_mode.or(defaults.match_mode),
            output_format: self.output_format.or(defaults.output_format),
            verbose: self.verbose.or(defaults.verbose),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref match_mode) = cli_config.match_mode {
            self.match_mode = Some(match_mode.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Extensions with a leading dot, so `"h"` and `".h"` mean the same suffix
    pub fn extensions(&self) -> Vec<String> {
        match self.extensions {
            Some(ref extensions) => extensions
                .iter()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{ext}")
                    }
                })
                .collect(),
            None => files::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    pub fn match_mode(&self) -> Result<MatchMode> {
        self.match_mode
            .as_deref()
            .unwrap_or(matching::DEFAULT)
            .parse()
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Options for a relocate run built from this configuration
    pub fn relocate_options(&self, dry_run: bool) -> Result<RelocateOptions> {
        Ok(RelocateOptions {
            extensions: self.extensions(),
            match_mode: self.match_mode()?,
            dry_run,
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref extensions) = self.extensions {
            if extensions.is_empty() {
                return Err(RelinkError::Config(
                    "Extension list cannot be empty. Expected at least one suffix such as \".c\"."
                        .to_string(),
                ));
            }
            for ext in extensions {
                if ext.trim().is_empty() || ext == "." {
                    return Err(RelinkError::Config(format!(
                        "Extension '{ext}' is empty. Expected a suffix such as \".c\" or \"h\"."
                    )));
                }
                if ext.contains(['/', '\\']) {
                    return Err(RelinkError::Config(format!(
                        "Extension '{ext}' contains a path separator."
                    )));
                }
            }
        }

        self.match_mode()?;

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(RelinkError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Matching
    pub match_mode: Option<String>, // --match
    pub dry_run: bool,              // --dry-run

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.extensions().len(), 6);
        assert_eq!(config.match_mode().unwrap(), MatchMode::Basename);
        assert_eq!(config.output_format(), output_formats::TEXT);
        assert_eq!(config.verbose, Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"extensions = [\"c\", \".h\", \".S\"]\nmatch_mode = \"full-path\"")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.extensions(), vec![".c", ".h", ".S"]);
        assert_eq!(config.match_mode()?, MatchMode::FullPath);
        // Left-out keys fall back to defaults
        assert_eq!(config.output_format(), output_formats::TEXT);
        assert_eq!(config.verbose, Some(false));

        Ok(())
    }

    #[test]
    fn test_config_load_from_file__invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"extensions = [")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML in config file"));
        Ok(())
    }

    #[test]
    fn test_config_load_from_file__unknown_key() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"scan_root = \"/\"")?;

        assert!(Config::load_from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_load_from_file__missing() {
        let err = Config::load_from_file("/definitely/missing/.relink.toml").unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn test_standard_locations() {
        let locations = Config::standard_locations(Path::new("/a/b/c/d/e"));

        assert_eq!(
            locations,
            vec![
                PathBuf::from("/a/b/c/d/e/.relink.toml"),
                PathBuf::from("/a/b/c/d/.relink.toml"),
                PathBuf::from("/a/b/c/.relink.toml"),
                PathBuf::from("/a/b/.relink.toml"),
            ]
        );
    }

    #[test]
    fn test_load_from_standard_locations__parent_directory() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let nested = temp_dir.path().join("tools/scripts");
        fs::create_dir_all(&nested)?;
        fs::write(
            temp_dir.path().join("tools/.relink.toml"),
            "output_format = \"json\"\n",
        )?;

        let config = Config::load_from_standard_locations(&nested)?;
        assert_eq!(config.output_format(), output_formats::JSON);
        Ok(())
    }

    #[test]
    fn test_load_from_standard_locations__nearest_wins() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let nested = temp_dir.path().join("tools");
        fs::create_dir_all(&nested)?;
        fs::write(
            temp_dir.path().join(".relink.toml"),
            "match_mode = \"full-path\"\n",
        )?;
        fs::write(nested.join(".relink.toml"), "verbose = true\n")?;

        let config = Config::load_from_standard_locations(&nested)?;
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.match_mode()?, MatchMode::Basename);
        Ok(())
    }

    #[test]
    fn test_load_from_standard_locations__defaults() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;

        let config = Config::load_from_standard_locations(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            match_mode: Some("full-path".to_string()),
            output_format: Some("json".to_string()),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.match_mode.as_deref(), Some("full-path"));
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_config_merge_with_cli__keeps_file_values() {
        let mut config = Config {
            match_mode: Some("full-path".to_string()),
            verbose: Some(true),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.match_mode.as_deref(), Some("full-path"));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_validate__rejects_bad_values() {
        let empty_list = Config {
            extensions: Some(vec![]),
            ..Default::default()
        };
        assert!(empty_list.validate().is_err());

        let blank_ext = Config {
            extensions: Some(vec![".c".to_string(), " ".to_string()]),
            ..Default::default()
        };
        assert!(blank_ext.validate().is_err());

        let separator = Config {
            extensions: Some(vec!["src/.c".to_string()]),
            ..Default::default()
        };
        assert!(separator.validate().is_err());

        let bad_mode = Config {
            match_mode: Some("fuzzy".to_string()),
            ..Default::default()
        };
        assert!(bad_mode.validate().is_err());

        let bad_format = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = bad_format.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid output format 'xml'"));
    }

    #[test]
    fn test_relocate_options() -> Result<()> {
        let config = Config {
            extensions: Some(vec!["inl".to_string()]),
            match_mode: Some("full-path".to_string()),
            ..Default::default()
        };

        let options = config.relocate_options(true)?;
        assert_eq!(options.extensions, vec![".inl"]);
        assert_eq!(options.match_mode, MatchMode::FullPath);
        assert!(options.dry_run);
        Ok(())
    }
}
