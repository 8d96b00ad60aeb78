use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};
use tablet_core::demo::{format_money, PLAYER_STATUS};

use crate::app::resources::Overlay;
use crate::ui::HUD_EDGE_PADDING;

pub fn hud_overlay(mut contexts: EguiContexts, overlay: Res<Overlay>) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("hud_status"))
        .order(egui::Order::Background)
        .anchor(
            egui::Align2::LEFT_TOP,
            egui::vec2(HUD_EDGE_PADDING, HUD_EDGE_PADDING),
        )
        .show(ctx, |ui| {
            ui.group(|ui| {
                ui.colored_label(
                    egui::Color32::LIGHT_GREEN,
                    format!("Health: {}%", PLAYER_STATUS.health_pct),
                );
                ui.colored_label(
                    egui::Color32::LIGHT_BLUE,
                    format!("Armor: {}%", PLAYER_STATUS.armor_pct),
                );
                ui.colored_label(
                    egui::Color32::YELLOW,
                    format!("Cash: {}", format_money(PLAYER_STATUS.cash)),
                );
            });
        });

    if !overlay.0.is_open() {
        egui::Area::new(egui::Id::new("hud_hint"))
            .order(egui::Order::Background)
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-HUD_EDGE_PADDING, -HUD_EDGE_PADDING),
            )
            .show(ctx, |ui| {
                ui.group(|ui| {
                    ui.label(format!(
                        "Press {} to open tablet",
                        overlay.0.config().toggle_key
                    ));
                });
            });
    }

    if overlay.0.is_blocked() {
        blocked_banner(ctx, &overlay);
    }
}

fn blocked_banner(ctx: &egui::Context, overlay: &Overlay) {
    egui::Area::new(egui::Id::new("hud_blocked"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_unmultiplied(180, 30, 30, 230))
                .rounding(8.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.colored_label(
                        egui::Color32::WHITE,
                        egui::RichText::new("Cannot open tablet in current context").strong(),
                    );
                    if let Some(block) = overlay.0.last_block() {
                        ui.colored_label(egui::Color32::WHITE, block.describe());
                    }
                });
        });
    ctx.request_repaint();
}
