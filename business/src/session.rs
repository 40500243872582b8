//! Typed session identity for the dashboard chrome.
//!
//! The console does not authenticate anyone. A [`SessionProvider`] hands the
//! chrome a typed [`Session`] and accepts a logout intent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Staff role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Administrator,
    Registrar,
    FinanceOfficer,
    Lecturer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Registrar => "Registrar",
            Self::FinanceOfficer => "Finance Officer",
            Self::Lecturer => "Lecturer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "administrator" | "admin" => Ok(Self::Administrator),
            "registrar" => Ok(Self::Registrar),
            "finance-officer" | "finance" => Ok(Self::FinanceOfficer),
            "lecturer" => Ok(Self::Lecturer),
            _ => Err(ConfigError::UnknownRole(value.to_owned())),
        }
    }
}

/// Current authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub full_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(full_name: impl Into<String>, role: Role) -> Self {
        Self {
            full_name: full_name.into(),
            role,
        }
    }

    /// "Full Name · Role" line for the top bar.
    pub fn display_line(&self) -> String {
        format!("{} · {}", self.full_name, self.role)
    }
}

/// Supplies the current identity and handles logout.
pub trait SessionProvider {
    fn session(&self) -> Option<&Session>;

    fn logout(&mut self);

    fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }
}

/// Session provider backed by a fixed, configured identity.
#[derive(Debug, Clone)]
pub struct ConfiguredSession {
    identity: Session,
    current: Option<Session>,
}

impl ConfiguredSession {
    /// Starts signed in as `identity`.
    pub fn new(identity: Session) -> Self {
        Self {
            current: Some(identity.clone()),
            identity,
        }
    }

    /// Restores the configured identity after a logout.
    pub fn sign_in(&mut self) {
        log::info!("session restored for {}", self.identity.full_name);
        self.current = Some(self.identity.clone());
    }
}

impl SessionProvider for ConfiguredSession {
    fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("{} logged out", session.full_name);
        }
    }
}
