use bevy_egui::egui;
use tablet_core::demo::{AcademyStatus, ACADEMIES, PROFILE, SKILLS, SKILL_POINTS_AVAILABLE};

use super::{card, field, header, tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Skills,
    Academies,
    Badges,
}

#[derive(Default)]
pub struct ProfileState {
    tab: ProfileTab,
}

pub fn show(ui: &mut egui::Ui, st: &mut ProfileState) {
    header(ui, "My Profile", "Main dashboard");

    card(ui, "Digital identity card", |ui| {
        egui::Grid::new("profile_identity")
            .num_columns(2)
            .spacing([32.0, 8.0])
            .show(ui, |ui| {
                field(ui, "Full name", PROFILE.full_name);
                field(ui, "Age", format!("{} years", PROFILE.age));
                ui.end_row();
                field(ui, "Citizenship", PROFILE.citizenship);
                field(ui, "Citizen ID", PROFILE.citizen_id);
                ui.end_row();
                field(ui, "Date of birth", PROFILE.birth_date);
                field(ui, "Status", PROFILE.status);
                ui.end_row();
            });
    });
    ui.add_space(8.0);

    tabs(
        ui,
        &mut st.tab,
        &[
            (ProfileTab::Skills, "Global skill tree"),
            (ProfileTab::Academies, "Academies"),
            (ProfileTab::Badges, "Badge wallet"),
        ],
    );

    match st.tab {
        ProfileTab::Skills => {
            for skill in SKILLS {
                ui.horizontal(|ui| {
                    ui.label(skill.name);
                    ui.add(
                        egui::ProgressBar::new(skill.level as f32 / skill.max_level as f32)
                            .text(format!("{}/{}", skill.level, skill.max_level)),
                    );
                });
            }
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(format!("Points available: {SKILL_POINTS_AVAILABLE}"));
                if ui.button("Allocate points").clicked() {
                    tracing::debug!("skill point allocation requested");
                }
            });
        }
        ProfileTab::Academies => {
            for academy in ACADEMIES {
                card(ui, academy.name, |ui| {
                    let status = match academy.status {
                        AcademyStatus::Licensed => "Licensed",
                        AcademyStatus::InProgress => "In progress",
                        AcademyStatus::NotStarted => "Not started",
                    };
                    ui.label(status);
                    ui.add(egui::ProgressBar::new(f32::from(academy.progress) / 100.0).show_percentage());
                });
                ui.add_space(4.0);
            }
        }
        ProfileTab::Badges => {
            let badges: Vec<&str> = ACADEMIES.iter().flat_map(|a| a.badges.iter().copied()).collect();
            if badges.is_empty() {
                ui.weak("No badges yet.");
            }
            ui.horizontal_wrapped(|ui| {
                for badge in badges {
                    ui.label(egui::RichText::new(format!("🏅 {badge}")).strong());
                }
            });
        }
    }
}
