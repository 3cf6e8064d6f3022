//! # CLI Configuration
//!
//! Optional JSON config file. A missing file means defaults; a malformed one
//! is an error. Every field may be omitted.
//!
//! ```json
//! {
//!   "format": "text",
//!   "display": { "conversion_decimals": 4, "stress_decimals": 2, "deflection_decimals": 2 }
//! }
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use calc_core::DisplaySettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::OutputFormat;
use crate::error::CliError;

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "fieldcalc.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// Decimal places in text reports
    pub display: DisplaySettings,
}

/// `--config` / `FIELDCALC_CONFIG` if set, else `./fieldcalc.json`
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load the config at `path`, falling back to defaults if it does not exist.
pub fn load(path: &Path) -> Result<CliConfig, CliError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(CliConfig::default());
        }
        Err(e) => return Err(CliError::io("read", path, e)),
    };

    let config = serde_json::from_str(&contents).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Write `config` to `path` atomically (temp file, fsync, rename).
pub fn save(config: &CliConfig, path: &Path, overwrite: bool) -> Result<(), CliError> {
    if path.exists() && !overwrite {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }

    let json = serde_json::to_string_pretty(config).map_err(calc_core::CalcError::from)?;

    let tmp_path = path.with_extension("json.tmp");
    let mut tmp_file = File::create(&tmp_path).map_err(|e| CliError::io("create", &tmp_path, e))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CliError::io("write", &tmp_path, e))?;
    tmp_file.sync_all().map_err(|e| CliError::io("sync", &tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| CliError::io("rename", path, e))?;

    debug!(path = %path.display(), "Saved config");
    Ok(())
}
