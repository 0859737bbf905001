use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_LOGIN_URL: &str = "https://api.peppypresence.com/api/employee/login";
pub const DEFAULT_ATTENDANCE_URL: &str = "https://people-pilot.onrender.com/api/attendance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_attendance_url")]
    pub attendance_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Default account used when --email is not given
    #[serde(default)]
    pub email: Option<String>,
    /// Fixed device position reported by punch in/out
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}
fn default_attendance_url() -> String {
    DEFAULT_ATTENDANCE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            attendance_url: default_attendance_url(),
            timeout_secs: default_timeout_secs(),
            email: None,
            latitude: None,
            longitude: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rpresence`)
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".rpresence")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpresence.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file (unless in test mode)
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(&dir)?;

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
