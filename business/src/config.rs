//! Console configuration read from `REGISTRAR_*` environment variables.

use std::env::vars;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::{ConfigError, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE, Role, Session};

const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_USER_NAME: &str = "Registry Office";

// The final, validated configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    page_size: u32,
    window_size: u32,
    export_dir: PathBuf,
    session: Session,
    latency: Duration,
}

// Intermediate struct for deserializing environment variables, every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    registrar_page_size: Option<u32>,
    registrar_window_size: Option<u32>,
    registrar_export_dir: Option<String>,
    registrar_user_name: Option<String>,
    registrar_user_role: Option<String>,
    registrar_latency_ms: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            session: Session::new(DEFAULT_USER_NAME, Role::Registrar),
            latency: Duration::ZERO,
        }
    }
}

impl ConsoleConfig {
    /// Reads configuration from the process environment.
    pub fn init() -> Result<Self, ConfigError> {
        log::info!("Loading configuration from environment variables");
        Self::from_env_iter(vars())
    }

    /// Reads configuration from explicit `(name, value)` pairs.
    pub fn from_env_iter<I, S>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(iter)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            registrar_page_size,
            registrar_window_size,
            registrar_export_dir,
            registrar_user_name,
            registrar_user_role,
            registrar_latency_ms,
        } = raw;

        let page_size = match registrar_page_size {
            Some(0) => return Err(ConfigError::Zero { name: "REGISTRAR_PAGE_SIZE" }),
            Some(size) => size,
            None => {
                log::info!("REGISTRAR_PAGE_SIZE not set, defaulting to {DEFAULT_PAGE_SIZE}");
                DEFAULT_PAGE_SIZE
            }
        };

        let window_size = match registrar_window_size {
            Some(0) => {
                return Err(ConfigError::Zero {
                    name: "REGISTRAR_WINDOW_SIZE",
                });
            }
            Some(size) => size,
            None => DEFAULT_WINDOW_SIZE,
        };

        let export_dir = registrar_export_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

        let role = match registrar_user_role {
            Some(role) => role.parse::<Role>()?,
            None => Role::Registrar,
        };
        let full_name = registrar_user_name.unwrap_or_else(|| {
            log::info!("REGISTRAR_USER_NAME not set, using {DEFAULT_USER_NAME:?}");
            DEFAULT_USER_NAME.to_owned()
        });

        Ok(Self {
            page_size,
            window_size,
            export_dir,
            session: Session::new(full_name, role),
            latency: Duration::from_millis(registrar_latency_ms.unwrap_or(0)),
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Identity the session provider starts with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Simulated fetch latency; zero answers synchronously.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Same configuration writing exports under `dir`.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::Zero {
                name: "REGISTRAR_PAGE_SIZE",
            });
        }
        self.page_size = page_size;
        Ok(self)
    }
}
