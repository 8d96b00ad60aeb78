use bevy_egui::egui;
use tablet_core::{AppId, TabletSettings};

mod academy;
mod bank;
mod citizen_services;
mod garage;
mod marketplace;
mod messaging;
mod profile;
mod properties;
mod settings;

/// Local UI state of every panel. Lives as long as the shell is mounted.
#[derive(Default)]
pub struct PanelState {
    profile: profile::ProfileState,
    bank: bank::BankState,
    garage: garage::GarageState,
    properties: properties::PropertiesState,
    citizen_services: citizen_services::CitizenServicesState,
    marketplace: marketplace::MarketplaceState,
    messaging: messaging::MessagingState,
    academy: academy::AcademyState,
}

/// Renders the active app. Returns the edited settings when the settings
/// panel changed them this frame.
pub fn show(
    ui: &mut egui::Ui,
    app: AppId,
    st: &mut PanelState,
    settings: &TabletSettings,
) -> Option<TabletSettings> {
    match app {
        AppId::Profile => profile::show(ui, &mut st.profile),
        AppId::Bank => bank::show(ui, &mut st.bank),
        AppId::Garage => garage::show(ui, &mut st.garage),
        AppId::Properties => properties::show(ui, &mut st.properties),
        AppId::CitizenServices => citizen_services::show(ui, &mut st.citizen_services),
        AppId::Marketplace => marketplace::show(ui, &mut st.marketplace),
        AppId::Messaging => messaging::show(ui, &mut st.messaging),
        AppId::AcademyGuide => academy::show(ui, &mut st.academy),
        AppId::Settings => return settings::show(ui, settings),
    }
    None
}

/// Panel title row with a badge on the right.
fn header(ui: &mut egui::Ui, title: &str, badge: &str) {
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(badge).small().weak());
        });
    });
    ui.add_space(8.0);
}

fn card<R>(ui: &mut egui::Ui, title: &str, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong());
            ui.add_space(4.0);
            add(ui)
        })
        .inner
}

fn field(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).small().weak());
        ui.label(value);
    });
}

/// Segmented tab strip over a fixed set of choices.
fn tabs<T: Copy + PartialEq>(ui: &mut egui::Ui, current: &mut T, choices: &[(T, &str)]) {
    ui.horizontal(|ui| {
        for &(value, label) in choices {
            ui.selectable_value(current, value, label);
        }
    });
    ui.separator();
}
