use bevy_egui::egui;
use tablet_core::demo::{count_vehicles, format_money, Vehicle, VehicleStatus, VEHICLES};

use super::{card, field, header};

#[derive(Default)]
pub struct GarageState {
    transfer_for: Option<&'static str>,
    buyer_id: String,
    price: String,
}

pub fn show(ui: &mut egui::Ui, st: &mut GarageState) {
    header(ui, "My Garage", "Vehicle management");

    ui.horizontal(|ui| {
        for status in [VehicleStatus::Garage, VehicleStatus::Impounded, VehicleStatus::Street] {
            card(ui, status.label(), |ui| {
                ui.heading(count_vehicles(VEHICLES, status).to_string());
            });
        }
    });
    ui.add_space(8.0);

    for vehicle in VEHICLES {
        vehicle_card(ui, vehicle, st);
        ui.add_space(6.0);
    }

    if let Some(id) = st.transfer_for {
        transfer_window(ui.ctx(), id, st);
    }
}

fn vehicle_card(ui: &mut egui::Ui, vehicle: &'static Vehicle, st: &mut GarageState) {
    card(ui, &format!("{} ({})", vehicle.model, vehicle.plate), |ui| {
        ui.label(egui::RichText::new(vehicle.status.label()).strong());
        egui::Grid::new(("vehicle", vehicle.id))
            .num_columns(3)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                field(ui, "Location", vehicle.location);
                field(ui, "Condition", vehicle.condition);
                field(ui, "Mileage", vehicle.mileage);
                ui.end_row();
                let insurance = if vehicle.insured {
                    egui::RichText::new("Active").color(egui::Color32::from_rgb(40, 160, 70))
                } else {
                    egui::RichText::new("Expired").color(ui.visuals().error_fg_color)
                };
                field(ui, "Insurance", insurance);
                field(ui, "Fuel", format!("{}%", vehicle.fuel));
                if vehicle.impound_fee > 0 {
                    field(ui, "Impound fee", format_money(vehicle.impound_fee));
                }
                ui.end_row();
            });

        ui.horizontal(|ui| {
            match vehicle.status {
                VehicleStatus::Garage => {
                    if ui.button("Locate").clicked() {
                        tracing::info!(plate = vehicle.plate, location = vehicle.location, "demo vehicle located");
                    }
                    if ui.button("Take out").clicked() {
                        tracing::info!(plate = vehicle.plate, "demo vehicle spawn requested");
                    }
                }
                VehicleStatus::Impounded => {
                    if ui.button("Pay & recover").clicked() {
                        tracing::info!(plate = vehicle.plate, "demo impound release requested");
                    }
                }
                VehicleStatus::Street => {
                    if ui.button("GPS").clicked() {
                        tracing::info!(plate = vehicle.plate, location = vehicle.location, "demo GPS waypoint set");
                    }
                    if ui.button("Call").clicked() {
                        tracing::info!(plate = vehicle.plate, "demo vehicle call requested");
                    }
                }
            }
            if ui.button("Transfer ownership").clicked() {
                st.transfer_for = Some(vehicle.id);
            }
        });
    });
}

fn transfer_window(ctx: &egui::Context, vehicle_id: &'static str, st: &mut GarageState) {
    let mut open = true;
    let mut done = false;
    let model = VEHICLES
        .iter()
        .find(|v| v.id == vehicle_id)
        .map_or("vehicle", |v| v.model);

    egui::Window::new(format!("Transfer {model}"))
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Buyer citizen ID");
            ui.add(egui::TextEdit::singleline(&mut st.buyer_id).hint_text("e.g. SA-2024-5678"));
            ui.label("Price");
            ui.add(egui::TextEdit::singleline(&mut st.price).hint_text("0"));
            ui.weak("Both parties must confirm. The buyer receives a notification.");
            ui.horizontal(|ui| {
                if ui.button("Start transfer").clicked() {
                    tracing::info!(vehicle = vehicle_id, buyer = %st.buyer_id, "demo ownership transfer");
                    done = true;
                }
                if ui.button("Cancel").clicked() {
                    done = true;
                }
            });
        });

    if !open || done {
        *st = GarageState::default();
    }
}
