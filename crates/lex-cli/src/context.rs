use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use lex_config::LexConfig;
use lex_core::dates::parse_calendar_date;
use lex_core::snapshot::Snapshot;

use crate::cli::GlobalFlags;

/// Everything a command handler needs: validated config, the loaded
/// snapshot, and the date treated as today.
#[derive(Debug)]
pub struct AppContext {
    pub config: LexConfig,
    pub snapshot: Snapshot,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn init(config: LexConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = snapshot_path(&config, flags);
        let snapshot = Snapshot::from_path(&path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?;

        if let Err(error) = snapshot.validate() {
            tracing::warn!(%error, path = %path.display(), "snapshot is inconsistent; continuing");
        }

        let today = resolve_today(flags.today.as_deref())?;
        tracing::debug!(%today, path = %path.display(), "application context ready");

        Ok(Self {
            config,
            snapshot,
            today,
        })
    }
}

/// Load `.env`, layered config, and reject unusable values.
pub fn load_config() -> anyhow::Result<LexConfig> {
    let config = LexConfig::load_with_dotenv().context("failed to load lexdesk configuration")?;
    config.validate().context("invalid lexdesk configuration")?;
    Ok(config)
}

fn snapshot_path(config: &LexConfig, flags: &GlobalFlags) -> PathBuf {
    flags
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.general.snapshot_path))
}

/// `--today` if given, otherwise the local calendar date.
pub fn resolve_today(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    match raw {
        Some(raw) => parse_calendar_date(raw).context("invalid --today"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
