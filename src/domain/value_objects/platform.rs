//! Platform value object - the host operating system as a rule lookup key

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};

/// Operating platform the generator runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Windows,
    #[serde(alias = "mac")]
    MacOs,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Classify the host this process runs on.
    pub fn current() -> GeneratorResult<Platform> {
        Self::classify(std::env::consts::OS)
    }

    /// Like [`from_os`](Self::from_os), failing for unknown systems.
    pub fn classify(os: &str) -> GeneratorResult<Platform> {
        Self::from_os(os).ok_or_else(|| GeneratorError::PlatformUnsupported { os: os.to_string() })
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Option<Platform> {
        match os {
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Stable numeric code
    pub fn code(&self) -> u8 {
        match self {
            Platform::Windows => 0,
            Platform::MacOs => 1,
            Platform::Linux => 2,
        }
    }

    /// The code as used by rule tables
    pub fn code_str(&self) -> String {
        self.code().to_string()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
