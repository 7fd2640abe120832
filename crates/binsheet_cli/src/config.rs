//! Optional TOML configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use binsheet_io_fs::{C_PATTERN_INPUT_DEFAULT, EnumFilePatternMode, SpecCollectOptions};
use binsheet_log::{C_FALLBACK_PREFIX_DEFAULT, SpecNaming};
use binsheet_report::SpecReportOptions;
use binsheet_report::conf::{C_METADATA_AUTHOR, C_METADATA_DESCRIPTION};
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent.
pub const C_CONFIG_FILE_DEFAULT: &str = "binsheet.toml";

/// Whole config file; every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BinsheetConfig {
    /// `[naming]`: bin display names.
    pub naming: NamingConfig,
    /// `[input]`: directory filtering.
    pub input: InputConfig,
    /// `[output]`: document properties.
    pub output: OutputConfig,
}

/// `[naming]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix for keys without an assigned name.
    pub prefix: String,
    /// Bin key -> display name.
    pub names: BTreeMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: C_FALLBACK_PREFIX_DEFAULT.to_string(),
            names: BTreeMap::new(),
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Filter applied to file names in directory inputs.
    pub pattern: String,
    /// How `pattern` is interpreted.
    pub rule_pattern: PatternRuleConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pattern: C_PATTERN_INPUT_DEFAULT.to_string(),
            rule_pattern: PatternRuleConfig::Glob,
        }
    }
}

/// `rule_pattern` values: `glob`, `regex` or `literal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternRuleConfig {
    /// Case-insensitive wildcards.
    #[default]
    Glob,
    /// Regular expression searched in the name.
    Regex,
    /// Case-insensitive substring.
    Literal,
}

impl From<PatternRuleConfig> for EnumFilePatternMode {
    fn from(value: PatternRuleConfig) -> Self {
        match value {
            PatternRuleConfig::Glob => Self::Glob,
            PatternRuleConfig::Regex => Self::Regex,
            PatternRuleConfig::Literal => Self::Literal,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Document author property.
    pub author: String,
    /// Document description property.
    pub description: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            author: C_METADATA_AUTHOR.to_string(),
            description: C_METADATA_DESCRIPTION.to_string(),
        }
    }
}

impl BinsheetConfig {
    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Explicit file, else `binsheet.toml` when present, else defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path_default = Path::new(C_CONFIG_FILE_DEFAULT);
                if path_default.is_file() {
                    Self::from_file(path_default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize back to TOML, e.g. for a `keys --write-template` file.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    /// Naming seed for the run.
    pub fn to_naming(&self) -> SpecNaming {
        SpecNaming::new(self.naming.names.clone(), self.naming.prefix.clone())
    }

    /// Directory filter for the run.
    pub fn to_collect_options(&self) -> SpecCollectOptions {
        SpecCollectOptions {
            pattern: self.input.pattern.clone(),
            rule_pattern: self.input.rule_pattern.into(),
        }
    }

    /// Report options stamped with the current time.
    pub fn to_report_options(&self) -> SpecReportOptions {
        SpecReportOptions {
            author: self.output.author.clone(),
            description: self.output.description.clone(),
            ..Default::default()
        }
    }
}
