use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tablet_core::{ControllerConfig, StaticOracle, TabletSettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletConfig {
    pub window_title: String,
    pub toggle_key: String,
    pub close_key: String,
    pub cooldown_ms: u64,
    pub blocked_pulse_ms: u64,
    /// Answers for the demo game-state oracle.
    pub game_state: StaticOracle,
    pub settings: TabletSettings,
}

impl Default for TabletConfig {
    fn default() -> Self {
        let ctl = ControllerConfig::default();
        Self {
            window_title: "Ano Academy".to_string(),
            toggle_key: ctl.toggle_key,
            close_key: ctl.close_key,
            cooldown_ms: ctl.cooldown.as_millis() as u64,
            blocked_pulse_ms: ctl.blocked_pulse.as_millis() as u64,
            game_state: StaticOracle::default(),
            settings: TabletSettings::default(),
        }
    }
}

impl TabletConfig {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            cooldown: Duration::from_millis(self.cooldown_ms),
            blocked_pulse: Duration::from_millis(self.blocked_pulse_ms),
            toggle_key: self.toggle_key.clone(),
            close_key: self.close_key.clone(),
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "ano-tablet")?;
    Some(proj.config_dir().join("tablet.toml"))
}

pub fn load_or_default() -> TabletConfig {
    let Some(path) = config_file_path() else {
        return TabletConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> TabletConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return TabletConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "invalid tablet config; using defaults");
        TabletConfig::default()
    })
}

pub fn save(cfg: &TabletConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)
}

fn save_to_path(cfg: &TabletConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize tablet config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write tablet config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablet_core::settings::Theme;
    use tempfile::tempdir;

    #[test]
    fn tablet_config_roundtrip_save_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tablet.toml");
        let mut cfg = TabletConfig::default();
        cfg.game_state.in_water = true;
        cfg.settings.theme = Theme::Light;

        save_to_path(&cfg, &path).expect("save config");
        let loaded = load_or_default_from_path(&path);

        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tablet.toml");
        assert_eq!(load_or_default_from_path(&path), TabletConfig::default());

        fs::write(&path, "cooldown_ms = \"soon\"").expect("write config");
        assert_eq!(load_or_default_from_path(&path), TabletConfig::default());
    }

    #[test]
    fn controller_config_uses_overrides() {
        let cfg: TabletConfig = toml::from_str(
            r#"
toggle_key = "F6"
cooldown_ms = 250

[game_state]
downed = true
"#,
        )
        .expect("parse config");

        let ctl = cfg.controller_config();
        assert_eq!(ctl.toggle_key, "F6");
        assert_eq!(ctl.close_key, "Escape");
        assert_eq!(ctl.cooldown, Duration::from_millis(250));
        assert_eq!(ctl.blocked_pulse, Duration::from_millis(2000));
        assert!(cfg.game_state.downed);
    }
}
