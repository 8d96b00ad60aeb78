use bevy_egui::egui;
use tablet_core::settings::{Language, Theme};
use tablet_core::TabletSettings;

use super::{card, header};

/// Edits a copy of the settings; returns it only when something changed.
pub fn show(ui: &mut egui::Ui, current: &TabletSettings) -> Option<TabletSettings> {
    let mut draft = current.clone();

    header(ui, "Settings & Preferences", "Preferences");
    if ui.button("⟲ Reset to defaults").clicked() {
        draft.reset_to_defaults();
    }
    ui.add_space(6.0);

    card(ui, "Appearance", |ui| {
        ui.horizontal(|ui| {
            ui.label("Theme");
            ui.selectable_value(&mut draft.theme, Theme::Dark, "Dark");
            ui.selectable_value(&mut draft.theme, Theme::Light, "Light");
        });
        ui.horizontal(|ui| {
            ui.label("Language");
            egui::ComboBox::from_id_source("settings_language")
                .selected_text(draft.language.label())
                .show_ui(ui, |ui| {
                    for language in [Language::Ro, Language::En] {
                        ui.selectable_value(&mut draft.language, language, language.label());
                    }
                });
        });
    });
    ui.add_space(6.0);

    card(ui, "Notifications", |ui| {
        let n = &mut draft.notifications;
        ui.checkbox(&mut n.job_updates, "Job updates");
        ui.checkbox(&mut n.academy_reminders, "Academy reminders");
        ui.checkbox(&mut n.license_expiry, "License expiry");
        ui.checkbox(&mut n.system_alerts, "System alerts");
        ui.checkbox(&mut n.sound_effects, "Sound effects");
        ui.checkbox(&mut n.vibration, "Vibration");
    });
    ui.add_space(6.0);

    card(ui, "Interface", |ui| {
        let i = &mut draft.interface;
        ui.checkbox(&mut i.compact_mode, "Compact mode");
        ui.checkbox(&mut i.show_animations, "Show animations");
        ui.checkbox(&mut i.auto_save, "Save changes automatically");
        ui.checkbox(&mut i.quick_access, "Quick access");
        ui.checkbox(&mut i.tooltips, "Tooltips");
    });
    ui.add_space(6.0);

    card(ui, "Accessibility", |ui| {
        let a = &mut draft.accessibility;
        ui.checkbox(&mut a.high_contrast, "High contrast");
        ui.checkbox(&mut a.large_text, "Large text");
        ui.checkbox(&mut a.reduced_motion, "Reduced motion");
        ui.checkbox(&mut a.screen_reader, "Screen reader support");
        ui.checkbox(&mut a.color_blind, "Color-blind palette");
    });

    if !current.interface.auto_save {
        ui.add_space(6.0);
        ui.weak("Use Apply to keep these settings after restart.");
    }

    (draft != *current).then_some(draft)
}
