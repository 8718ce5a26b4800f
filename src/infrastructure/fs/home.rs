//! Configuration directory resolution with test isolation support.
//!
//! On Windows, `dirs::config_dir()` uses the Windows system API
//! (`SHGetKnownFolderPath`) rather than environment variables, so tests
//! cannot redirect it through `APPDATA` or `XDG_CONFIG_HOME`.
//!
//! [`mdgen_config_dir`] checks `MDGEN_CONFIG_DIR` first and only then falls
//! back to `dirs::config_dir()`.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the configuration directory.
pub const MDGEN_CONFIG_DIR_VAR: &str = "MDGEN_CONFIG_DIR";

/// Base configuration directory; the user rule table lives in
/// `<dir>/mdgen/rules.toml`.
///
/// Returns `None` when neither the override is set nor the platform
/// configuration directory can be determined.
pub fn mdgen_config_dir() -> Option<PathBuf> {
    config_dir_from(std::env::var_os(MDGEN_CONFIG_DIR_VAR))
}

fn config_dir_from(override_dir: Option<OsString>) -> Option<PathBuf> {
    override_dir
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}
