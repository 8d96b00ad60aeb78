use bevy_egui::egui;
use tablet_core::demo::{format_money, listings_in, ListingCategory};

use super::{card, header};

#[derive(Default)]
pub struct MarketplaceState {
    category: ListingCategory,
    selected: Option<&'static str>,
    create_open: bool,
    draft: ListingDraft,
}

#[derive(Default)]
struct ListingDraft {
    title: String,
    price: String,
    description: String,
}

pub fn show(ui: &mut egui::Ui, st: &mut MarketplaceState) {
    header(ui, "Ano Market", "Online marketplace");
    if ui.button("Create listing").clicked() {
        st.create_open = true;
    }
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        for category in ListingCategory::ALL {
            if ui
                .selectable_value(&mut st.category, category, category.label())
                .clicked()
            {
                st.selected = None;
            }
        }
    });
    ui.separator();

    let mut any = false;
    for listing in listings_in(st.category) {
        any = true;
        let selected = st.selected == Some(listing.id);
        card(ui, listing.title, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format_money(listing.price)).strong());
                ui.weak(format!("{} • {} • {}", listing.seller, listing.location, listing.posted));
            });
            ui.label(listing.description);
            if selected {
                ui.weak(format!(
                    "Condition: {} • {} photo(s)",
                    listing.condition, listing.images
                ));
                ui.horizontal(|ui| {
                    if ui.button("Contact seller").clicked() {
                        tracing::info!(listing = listing.id, "demo seller contact");
                    }
                    if ui.button("Hide details").clicked() {
                        st.selected = None;
                    }
                });
            } else if ui.button("Details").clicked() {
                st.selected = Some(listing.id);
            }
        });
        ui.add_space(6.0);
    }
    if !any {
        ui.weak("No listings in this category.");
    }

    if st.create_open {
        create_window(ui.ctx(), st);
    }
}

fn create_window(ctx: &egui::Context, st: &mut MarketplaceState) {
    let mut open = st.create_open;
    let mut done = false;
    let category = st.category;
    egui::Window::new("Create listing")
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!("Category: {}", category.label()));
            ui.add(egui::TextEdit::singleline(&mut st.draft.title).hint_text("Title"));
            ui.add(egui::TextEdit::singleline(&mut st.draft.price).hint_text("Price"));
            ui.add(
                egui::TextEdit::multiline(&mut st.draft.description)
                    .hint_text("Description")
                    .desired_rows(4),
            );
            let valid = !st.draft.title.trim().is_empty()
                && st.draft.price.trim().parse::<u64>().is_ok();
            ui.horizontal(|ui| {
                if ui.add_enabled(valid, egui::Button::new("Publish")).clicked() {
                    tracing::info!(
                        category = category.label(),
                        title = %st.draft.title,
                        "demo listing published"
                    );
                    done = true;
                }
                if ui.button("Cancel").clicked() {
                    done = true;
                }
            });
        });
    if done {
        st.draft = ListingDraft::default();
        open = false;
    }
    st.create_open = open;
}
