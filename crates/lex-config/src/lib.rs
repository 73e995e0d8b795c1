//! # lex-config
//!
//! Layered configuration loading for LexDesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXDESK_*` prefix, `__` as separator)
//! 2. Project-level `.lexdesk/config.toml`
//! 3. User-level `~/.config/lexdesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXDESK_QUERY__CASE_PAGE_SIZE` -> `query.case_page_size`,
//! `LEXDESK_AGENDA__BRIEFING_CAP` -> `agenda.briefing_cap`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lex_config::LexConfig;
//!
//! let config = LexConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("cases per page: {}", config.query.case_page_size);
//! ```

mod agenda;
mod error;
mod general;
mod query;

pub use agenda::AgendaConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use query::QueryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub agenda: AgendaConfig,
}

impl LexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lexdesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LEXDESK_").split("__"))
    }

    /// Reject values the query and agenda layers cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero page sizes, a negative
    /// critical window, or a critical window wider than the warning window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.query.case_page_size()?;
        self.query.client_page_size()?;

        if self.agenda.critical_within_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "agenda.critical_within_days".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        if self.agenda.critical_within_days > self.agenda.warning_within_days {
            return Err(ConfigError::InvalidValue {
                field: "agenda.warning_within_days".to_string(),
                reason: format!(
                    "must be at least critical_within_days ({})",
                    self.agenda.critical_within_days
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexdesk").join("config.toml"))
    }
}
