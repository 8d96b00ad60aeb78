use bevy::prelude::Resource;
use std::time::Instant;
use tablet_core::{ShellNav, StaticOracle, TabletSettings, VisibilityController};

use crate::ui::panels::PanelState;
use crate::util::config::TabletConfig;

/// The overlay's visibility controller. Written by the key dispatch and the
/// shell's close actions; everything else only reads it.
#[derive(Resource)]
pub struct Overlay(pub VisibilityController<StaticOracle>);

/// Presentation state of the mounted tablet shell.
#[derive(Resource, Default)]
pub struct Shell {
    pub nav: ShellNav,
    pub opened_at: Option<Instant>,
    pub panels: PanelState,
}

impl Shell {
    /// Remount: navigation and every panel start over, like a fresh open.
    pub fn remount(&mut self, now: Instant) {
        *self = Self {
            opened_at: Some(now),
            ..Self::default()
        };
    }
}

#[derive(Resource)]
pub struct Prefs {
    pub cfg: TabletConfig,
}

impl Prefs {
    pub fn settings(&self) -> &TabletSettings {
        &self.cfg.settings
    }
}
