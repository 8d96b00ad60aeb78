use bevy_egui::egui;
use tablet_core::demo::{Eligibility, APPLICATIONS, POSITIONS};

use super::{card, field, header, tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    #[default]
    Careers,
    Complaints,
    Feedback,
    Applications,
}

#[derive(Default)]
pub struct CitizenServicesState {
    service: Service,
    selected_application: Option<&'static str>,
    complaint: ReportForm,
    feedback: ReportForm,
}

#[derive(Default)]
struct ReportForm {
    subject: String,
    details: String,
}

impl ReportForm {
    fn is_complete(&self) -> bool {
        !self.subject.trim().is_empty() && !self.details.trim().is_empty()
    }
}

pub fn show(ui: &mut egui::Ui, st: &mut CitizenServicesState) {
    header(ui, "Citizen Services", "Government portal");

    tabs(
        ui,
        &mut st.service,
        &[
            (Service::Careers, "Open careers"),
            (Service::Complaints, "Complaints"),
            (Service::Feedback, "Positive feedback"),
            (Service::Applications, "My applications"),
        ],
    );

    match st.service {
        Service::Careers => careers(ui),
        Service::Complaints => {
            report_form(ui, "File a complaint", "Person or department", &mut st.complaint)
        }
        Service::Feedback => {
            report_form(ui, "Send positive feedback", "Who helped you?", &mut st.feedback)
        }
        Service::Applications => applications(ui, st),
    }
}

fn careers(ui: &mut egui::Ui) {
    for position in POSITIONS {
        card(ui, &format!("{} ({})", position.name, position.department), |ui| {
            ui.label(position.description);
            ui.weak(format!(
                "Requires: {}, min. age {}{}",
                position.required_academy,
                position.min_age,
                if position.clean_record { ", clean record" } else { "" }
            ));
            ui.horizontal(|ui| match position.eligibility {
                Eligibility::Eligible => {
                    if ui.button("Apply").clicked() {
                        tracing::info!(position = position.id, "demo job application");
                    }
                }
                Eligibility::Applied => {
                    ui.label(egui::RichText::new("Application sent").strong());
                }
                Eligibility::NotEligible => {
                    ui.colored_label(ui.visuals().error_fg_color, "Not eligible");
                }
            });
        });
        ui.add_space(6.0);
    }
}

fn report_form(ui: &mut egui::Ui, title: &str, subject_hint: &str, form: &mut ReportForm) {
    card(ui, title, |ui| {
        ui.add(egui::TextEdit::singleline(&mut form.subject).hint_text(subject_hint));
        ui.add(
            egui::TextEdit::multiline(&mut form.details)
                .hint_text("Describe what happened")
                .desired_rows(5),
        );
        if ui
            .add_enabled(form.is_complete(), egui::Button::new("Submit"))
            .clicked()
        {
            tracing::info!(kind = title, subject = %form.subject, "demo report submitted");
            *form = ReportForm::default();
        }
    });
}

fn applications(ui: &mut egui::Ui, st: &mut CitizenServicesState) {
    for application in APPLICATIONS {
        let selected = st.selected_application == Some(application.id);
        let resp = ui.selectable_label(
            selected,
            format!(
                "{} • {} • {}",
                application.position,
                application.department,
                application.status.label()
            ),
        );
        if resp.clicked() {
            st.selected_application = if selected { None } else { Some(application.id) };
        }
        if selected {
            ui.indent(application.id, |ui| {
                field(ui, "Applied on", application.applied);
                if let Some(interview) = application.interview {
                    field(ui, "Interview", interview);
                }
                field(ui, "Notes", application.notes);
            });
        }
    }
}
