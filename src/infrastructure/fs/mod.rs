//! File system locations used by mdgen.

mod home;

pub use home::{mdgen_config_dir, MDGEN_CONFIG_DIR_VAR};
