use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use std::time::Instant;
use tablet_core::{KeyAction, KeyInput, TransitionResult};

use crate::app::resources::{Overlay, Shell};

/// A key press read from egui's event queue this frame.
struct EguiKeyPress {
    key: egui::Key,
    prevented: bool,
}

impl KeyInput for EguiKeyPress {
    fn key(&self) -> &str {
        self.key.name()
    }

    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}

pub fn handle_shortcuts(
    mut contexts: EguiContexts,
    mut overlay: ResMut<Overlay>,
    mut shell: ResMut<Shell>,
) {
    let ctx = contexts.ctx_mut();
    let now = Instant::now();
    overlay.0.tick(now);

    let pressed: Vec<egui::Key> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Some(*key),
                _ => None,
            })
            .collect()
    });

    for key in pressed {
        let mut press = EguiKeyPress {
            key,
            prevented: false,
        };
        let action = overlay.0.on_key_event(&mut press, now);
        if press.prevented {
            consume_key(ctx, key);
        }
        match action {
            KeyAction::Toggle(TransitionResult::Applied { is_open: true }) => shell.remount(now),
            KeyAction::Toggle(TransitionResult::Applied { is_open: false }) | KeyAction::Close => {
                shell.opened_at = None;
            }
            KeyAction::Toggle(TransitionResult::Suppressed(_)) | KeyAction::Ignored => {}
        }
    }
}

fn consume_key(ctx: &egui::Context, key: egui::Key) {
    ctx.input_mut(|i| {
        i.events.retain(|ev| {
            !matches!(ev, egui::Event::Key { key: k, pressed: true, .. } if *k == key)
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablet_core::{ControllerConfig, StaticOracle, VisibilityController};

    fn key_event(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn press(key: egui::Key) -> EguiKeyPress {
        EguiKeyPress {
            key,
            prevented: false,
        }
    }

    #[test]
    fn egui_key_names_match_default_bindings() {
        let cfg = ControllerConfig::default();
        assert_eq!(press(egui::Key::F2).key(), cfg.toggle_key);
        assert_eq!(press(egui::Key::Escape).key(), cfg.close_key);
    }

    #[test]
    fn mapped_keys_are_prevented() {
        let mut ctl = VisibilityController::new(StaticOracle::default());
        let t0 = Instant::now();

        let mut f2 = press(egui::Key::F2);
        ctl.on_key_event(&mut f2, t0);
        assert!(f2.prevented);
        assert!(ctl.is_open());

        let mut other = press(egui::Key::A);
        assert_eq!(ctl.on_key_event(&mut other, t0), KeyAction::Ignored);
        assert!(!other.prevented);
    }

    #[test]
    fn consume_key_drops_only_presses_of_that_key() {
        let ctx = egui::Context::default();
        ctx.begin_frame(egui::RawInput {
            events: vec![
                key_event(egui::Key::F2, true),
                key_event(egui::Key::F2, false),
                key_event(egui::Key::Escape, true),
                egui::Event::Text("x".to_string()),
            ],
            ..Default::default()
        });

        consume_key(&ctx, egui::Key::F2);

        let events = ctx.input(|i| i.events.clone());
        assert_eq!(
            events,
            vec![
                key_event(egui::Key::F2, false),
                key_event(egui::Key::Escape, true),
                egui::Event::Text("x".to_string()),
            ]
        );
        let _ = ctx.end_frame();
    }
}
