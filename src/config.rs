//! Config-file loading for the `config` CLI subcommand, mirroring the
//! original service's two start modes (config file vs. bare flags).

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub port: u16,
    #[serde(default)]
    pub path: Option<String>,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings> {
        let contents = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&contents)?;
        Ok(settings)
    }
}
