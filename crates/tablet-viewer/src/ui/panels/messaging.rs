use bevy_egui::egui;
use tablet_core::demo::{conversation, Contact, Presence, CONTACTS, SOCIAL_POSTS};

use super::{card, header, tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessagingTab {
    Contacts,
    #[default]
    Messages,
    Social,
}

pub struct MessagingState {
    tab: MessagingTab,
    contact: Option<&'static str>,
    compose: String,
}

impl Default for MessagingState {
    fn default() -> Self {
        Self {
            tab: MessagingTab::default(),
            contact: CONTACTS.first().map(|c| c.id),
            compose: String::new(),
        }
    }
}

pub fn show(ui: &mut egui::Ui, st: &mut MessagingState) {
    header(ui, "Contacts & Messaging", "Communication");

    tabs(
        ui,
        &mut st.tab,
        &[
            (MessagingTab::Contacts, "Contacts"),
            (MessagingTab::Messages, "Messages"),
            (MessagingTab::Social, "Social"),
        ],
    );

    match st.tab {
        MessagingTab::Contacts => contacts(ui, st),
        MessagingTab::Messages => messages(ui, st),
        MessagingTab::Social => social(ui),
    }
}

fn presence_color(presence: Presence) -> egui::Color32 {
    match presence {
        Presence::Online => egui::Color32::from_rgb(40, 160, 70),
        Presence::Busy => egui::Color32::from_rgb(220, 160, 30),
        Presence::Offline => egui::Color32::GRAY,
    }
}

fn contact_row(ui: &mut egui::Ui, contact: &Contact, selected: bool) -> egui::Response {
    ui.horizontal(|ui| {
        ui.colored_label(presence_color(contact.presence), "●");
        ui.selectable_label(selected, contact.name)
    })
    .inner
}

fn contacts(ui: &mut egui::Ui, st: &mut MessagingState) {
    for contact in CONTACTS {
        let resp = contact_row(ui, contact, false);
        ui.indent(contact.id, |ui| ui.weak(contact.phone));
        if resp.clicked() {
            st.contact = Some(contact.id);
            st.tab = MessagingTab::Messages;
        }
    }
}

fn messages(ui: &mut egui::Ui, st: &mut MessagingState) {
    ui.columns(2, |cols| {
        for contact in CONTACTS {
            if contact_row(&mut cols[0], contact, st.contact == Some(contact.id)).clicked() {
                st.contact = Some(contact.id);
            }
        }

        let ui = &mut cols[1];
        let Some(contact_id) = st.contact else {
            ui.weak("Pick a contact.");
            return;
        };
        let mut empty = true;
        for msg in conversation(contact_id) {
            empty = false;
            let layout = if msg.from_me {
                egui::Layout::right_to_left(egui::Align::TOP)
            } else {
                egui::Layout::left_to_right(egui::Align::TOP)
            };
            ui.with_layout(layout, |ui| {
                ui.label(msg.text);
                ui.weak(msg.time);
            });
        }
        if empty {
            ui.weak("No messages yet.");
        }
        ui.separator();
        ui.horizontal(|ui| {
            let resp = ui.add(egui::TextEdit::singleline(&mut st.compose).hint_text("Write a message"));
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Send").clicked() || enter) && !st.compose.trim().is_empty() {
                tracing::info!(contact = contact_id, "demo message sent");
                st.compose.clear();
            }
        });
    });
}

fn social(ui: &mut egui::Ui) {
    for post in SOCIAL_POSTS {
        card(ui, post.author, |ui| {
            ui.label(post.content);
            ui.weak(format!(
                "{} • ♥ {} • 💬 {}",
                post.time, post.likes, post.comments
            ));
        });
        ui.add_space(6.0);
    }
}
