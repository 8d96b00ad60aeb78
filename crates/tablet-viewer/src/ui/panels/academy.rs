use bevy_egui::egui;
use tablet_core::demo::{average_progress, FAQ, TUTORIALS};

use super::{card, header, tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Tutorials,
    Faq,
}

#[derive(Default)]
pub struct AcademyState {
    section: Section,
    tutorial: Option<&'static str>,
}

pub fn show(ui: &mut egui::Ui, st: &mut AcademyState) {
    header(ui, "Academy Guide", "Knowledge base");

    tabs(
        ui,
        &mut st.section,
        &[(Section::Tutorials, "Tutorials"), (Section::Faq, "FAQ")],
    );

    match st.section {
        Section::Tutorials => tutorials(ui, st),
        Section::Faq => {
            for item in FAQ {
                egui::CollapsingHeader::new(item.question)
                    .id_source(item.question)
                    .show(ui, |ui| {
                        ui.label(item.answer);
                    });
            }
        }
    }
}

fn tutorials(ui: &mut egui::Ui, st: &mut AcademyState) {
    ui.horizontal(|ui| {
        ui.label("Overall progress");
        ui.add(
            egui::ProgressBar::new(f32::from(average_progress(TUTORIALS)) / 100.0)
                .show_percentage(),
        );
    });
    ui.add_space(6.0);

    for tutorial in TUTORIALS {
        let open = st.tutorial == Some(tutorial.id);
        card(ui, tutorial.title, |ui| {
            ui.label(tutorial.description);
            ui.weak(format!("{} • {}", tutorial.duration, tutorial.difficulty));
            ui.add(egui::ProgressBar::new(f32::from(tutorial.progress) / 100.0).show_percentage());

            if open {
                for (i, module) in tutorial.modules.iter().enumerate() {
                    ui.label(format!("{}. {module}", i + 1));
                }
            }
            let action = match (open, tutorial.progress) {
                (true, _) => "Hide modules",
                (false, 0) => "Start",
                (false, 100) => "Review",
                (false, _) => "Continue",
            };
            if ui.button(action).clicked() {
                st.tutorial = if open { None } else { Some(tutorial.id) };
            }
        });
        ui.add_space(6.0);
    }
}
