use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Deserialization of dirtree.toml
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Defaults for `dirtree export`
    #[serde(default)]
    pub export: ExportSection,

    /// Defaults for `dirtree create`
    #[serde(default)]
    pub create: CreateSection,
}

/// The `[export]` table of dirtree.toml
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    /// Glob patterns of directories to leave out of the listing
    #[serde(default)]
    pub ignore: Vec<String>,

    /// A file of further ignore patterns (relative to the config file's directory)
    pub ignore_file: Option<Utf8PathBuf>,

    /// The maximum depth to list (negative for an empty listing)
    pub depth: Option<i32>,

    /// Where to write the listing (relative to the current directory)
    pub output: Option<Utf8PathBuf>,
}

/// The `[create]` table of dirtree.toml
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateSection {
    /// Whether the root line of the listing should be left out
    #[serde(default)]
    pub strip_root: bool,

    /// Whether to stop at the first malformed or unreachable line
    #[serde(default)]
    pub strict: bool,
}

impl ConfigFile {
    /// Load a configuration from the specified file
    ///
    /// Any relative `ignore_file` is resolved against the directory containing the config file.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_context = || format!("Reading config file {path:?}");
        let config_data = std::fs::read_to_string(path).with_context(config_context)?;
        let mut config: ConfigFile = config_data
            .as_str()
            .try_into()
            .with_context(|| format!("Parsing config file {path:?}"))?;
        if let (Some(ignore_file), Some(directory)) =
            (config.export.ignore_file.as_mut(), path.parent())
        {
            if ignore_file.is_relative() {
                *ignore_file = directory.join(&*ignore_file);
            }
        }
        Ok(config)
    }
}

impl TryFrom<&str> for ConfigFile {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(toml::from_str(value)?)
    }
}
