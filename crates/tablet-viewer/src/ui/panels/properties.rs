use bevy_egui::egui;
use tablet_core::demo::{format_money, Property, TaxStatus, FURNITURE_PACKAGES, PROPERTIES};

use super::{card, field, header};

#[derive(Default)]
pub struct PropertiesState {
    access_for: Option<&'static str>,
    new_access: String,
    furniture_open: bool,
}

pub fn show(ui: &mut egui::Ui, st: &mut PropertiesState) {
    header(ui, "Property Registry", "Real estate");

    let total: i64 = PROPERTIES.iter().map(|p| p.value).sum();
    ui.label(format!(
        "{} properties, total value {}",
        PROPERTIES.len(),
        format_money(total)
    ));
    ui.add_space(6.0);

    for property in PROPERTIES {
        property_card(ui, property, st);
        ui.add_space(6.0);
    }

    if ui.button("Furniture store").clicked() {
        st.furniture_open = true;
    }

    if let Some(id) = st.access_for {
        access_window(ui.ctx(), id, st);
    }
    if st.furniture_open {
        furniture_window(ui.ctx(), st);
    }
}

fn property_card(ui: &mut egui::Ui, property: &'static Property, st: &mut PropertiesState) {
    card(ui, property.name, |ui| {
        ui.weak(property.address);
        egui::Grid::new(("property", property.id))
            .num_columns(3)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                field(ui, "Type", property.kind);
                field(ui, "Value", format_money(property.value));
                let tax = match property.tax_status {
                    TaxStatus::Paid => egui::RichText::new(format!("Paid, next {}", property.next_tax_due)),
                    TaxStatus::Due => egui::RichText::new(format!(
                        "Due: {}",
                        format_money(property.tax_amount)
                    ))
                    .color(ui.visuals().error_fg_color),
                };
                field(ui, "Property tax", tax);
                ui.end_row();
            });
        ui.horizontal_wrapped(|ui| {
            for amenity in property.amenities {
                ui.label(egui::RichText::new(*amenity).small());
            }
        });
        ui.horizontal(|ui| {
            ui.label(format!("Access: {}", property.access_list.join(", ")));
            if ui.button("Manage access").clicked() {
                st.access_for = Some(property.id);
            }
            if property.tax_status == TaxStatus::Due && ui.button("Pay tax").clicked() {
                tracing::info!(property = property.id, "demo tax payment");
            }
        });
    });
}

fn access_window(ctx: &egui::Context, property_id: &'static str, st: &mut PropertiesState) {
    let Some(property) = PROPERTIES.iter().find(|p| p.id == property_id) else {
        st.access_for = None;
        return;
    };
    let mut open = true;
    egui::Window::new(format!("Access: {}", property.name))
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            for person in property.access_list {
                ui.horizontal(|ui| {
                    ui.label(*person);
                    if ui.small_button("Revoke").clicked() {
                        tracing::info!(property = property.id, person = *person, "demo access revoked");
                    }
                });
            }
            ui.separator();
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut st.new_access).hint_text("Citizen name or ID"));
                if ui.button("Grant").clicked() && !st.new_access.trim().is_empty() {
                    tracing::info!(property = property.id, person = %st.new_access, "demo access granted");
                    st.new_access.clear();
                }
            });
        });
    if !open {
        st.access_for = None;
        st.new_access.clear();
    }
}

fn furniture_window(ctx: &egui::Context, st: &mut PropertiesState) {
    let mut open = st.furniture_open;
    egui::Window::new("Furniture store")
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            for package in FURNITURE_PACKAGES {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(package.name).strong());
                        ui.weak(package.items);
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Buy").clicked() {
                            tracing::info!(package = package.name, "demo furniture purchase");
                        }
                        ui.label(format_money(package.price));
                    });
                });
                ui.separator();
            }
        });
    st.furniture_open = open;
}
