use bevy::prelude::{DetectChanges, Res};
use bevy_egui::{egui, EguiContexts};
use tablet_core::settings::Theme;
use tablet_core::TabletSettings;

use crate::app::resources::Prefs;

pub fn apply_visuals(mut contexts: EguiContexts, prefs: Res<Prefs>) {
    if !prefs.is_changed() {
        return;
    }
    let ctx = contexts.ctx_mut();
    ctx.set_visuals(visuals_for(prefs.settings()));
    ctx.set_zoom_factor(if prefs.settings().accessibility.large_text {
        1.25
    } else {
        1.0
    });

    let compact = prefs.settings().interface.compact_mode;
    ctx.style_mut(|style| {
        style.spacing.item_spacing = if compact {
            egui::vec2(4.0, 2.0)
        } else {
            egui::vec2(8.0, 4.0)
        };
        style.animation_time = if prefs.settings().animations_enabled() {
            1.0 / 12.0
        } else {
            0.0
        };
    });
}

fn visuals_for(settings: &TabletSettings) -> egui::Visuals {
    let mut visuals = match settings.theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    if settings.accessibility.high_contrast {
        visuals.override_text_color = Some(match settings.theme {
            Theme::Dark => egui::Color32::WHITE,
            Theme::Light => egui::Color32::BLACK,
        });
    }
    if settings.accessibility.color_blind {
        // blue/orange instead of green/red for status colours
        visuals.error_fg_color = egui::Color32::from_rgb(230, 140, 20);
        visuals.hyperlink_color = egui::Color32::from_rgb(40, 120, 230);
    }
    visuals
}
