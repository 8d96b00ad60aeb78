use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use std::time::{Duration, Instant};
use tablet_core::Category;

use crate::app::resources::{Overlay, Prefs, Shell};
use crate::ui::{panels, SHELL_INSET, SHELL_NAV_W};
use crate::util::config;

const ENTER_ANIMATION: Duration = Duration::from_millis(300);
const ENTER_TRAVEL: f32 = 40.0;
const VERSION_LABEL: &str = "Ano Academy Tablet System v3.0.0";

pub fn tablet_shell(
    mut contexts: EguiContexts,
    mut overlay: ResMut<Overlay>,
    mut shell: ResMut<Shell>,
    mut prefs: ResMut<Prefs>,
) {
    if !overlay.0.is_open() {
        return;
    }
    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();

    let progress = entrance_progress(&shell, prefs.settings().animations_enabled());
    if progress < 1.0 {
        ctx.request_repaint();
    }

    egui::Area::new(egui::Id::new("tablet_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen,
                0.0,
                egui::Color32::from_black_alpha((200.0 * progress) as u8),
            );
            ui.allocate_rect(screen, egui::Sense::click());
        });

    let inset = SHELL_INSET + (1.0 - progress) * ENTER_TRAVEL;
    let rect = screen.shrink(inset);

    let mut close_requested = false;
    let mut apply_requested = false;
    let mut edited = None;
    let shell = &mut *shell;

    egui::Window::new("Ano Academy Tablet")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_rect(rect)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::TopBottomPanel::top("tablet_header").show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading("Ano Academy Tablet");
                        let (category, app) = shell.nav.breadcrumb();
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(category).strong());
                            ui.label(format!("/ {app}"));
                        });
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕ ESC").clicked() {
                            close_requested = true;
                        }
                    });
                });
            });

            egui::TopBottomPanel::bottom("tablet_footer").show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.small(VERSION_LABEL);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            close_requested = true;
                        }
                        if ui.button("Apply").clicked() {
                            apply_requested = true;
                        }
                    });
                });
            });

            egui::SidePanel::left("tablet_nav")
                .resizable(false)
                .exact_width(SHELL_NAV_W)
                .show_inside(ui, |ui| {
                    navigation(ui, &mut *shell);
                });

            egui::CentralPanel::default().show_inside(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    edited = panels::show(ui, shell.nav.app(), &mut shell.panels, prefs.settings());
                });
            });
        });

    if let Some(settings) = edited {
        let auto_save = settings.interface.auto_save;
        prefs.cfg.settings = settings;
        apply_requested |= auto_save;
    }
    if apply_requested {
        match config::save(&prefs.cfg) {
            Ok(()) => tracing::info!("tablet settings saved"),
            Err(err) => tracing::error!(error = %err, "failed to save tablet settings"),
        }
    }
    if close_requested {
        overlay.0.close();
        shell.opened_at = None;
    }
}

fn navigation(ui: &mut egui::Ui, shell: &mut Shell) {
    ui.label(egui::RichText::new("Categories").strong());
    ui.add_space(4.0);
    for category in Category::ALL {
        let selected = shell.nav.category() == category;
        let text = format!("{}\n{}", category.label(), category.description());
        if ui.selectable_label(selected, text).clicked() && !selected {
            shell.nav.select_category(category);
        }
    }

    ui.separator();
    ui.label(egui::RichText::new("Apps").strong());
    ui.add_space(4.0);
    for &app in shell.nav.category().apps() {
        let selected = shell.nav.app() == app;
        if ui.selectable_label(selected, app.label()).clicked() {
            shell.nav.select_app(app);
        }
    }
}

fn entrance_progress(shell: &Shell, animate: bool) -> f32 {
    let Some(opened_at) = shell.opened_at else {
        return 1.0;
    };
    if !animate {
        return 1.0;
    }
    let elapsed = Instant::now().saturating_duration_since(opened_at);
    (elapsed.as_secs_f32() / ENTER_ANIMATION.as_secs_f32()).min(1.0)
}
