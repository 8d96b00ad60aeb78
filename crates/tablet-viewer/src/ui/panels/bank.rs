use bevy_egui::egui;
use tablet_core::demo::{
    bills_total, format_money, transaction_totals, BANK_ACCOUNT, PENDING_BILLS, TRANSACTIONS,
};

use super::{card, field, header};

#[derive(Default)]
pub struct BankState {
    expanded: Option<&'static str>,
    transfer_open: bool,
    bills_open: bool,
    transfer: TransferForm,
}

#[derive(Default)]
struct TransferForm {
    recipient: String,
    amount: String,
    reason: String,
}

pub fn show(ui: &mut egui::Ui, st: &mut BankState) {
    header(ui, "AnoBank", "Banking app");

    card(ui, "Current account", |ui| {
        egui::Grid::new("bank_account").num_columns(4).spacing([32.0, 8.0]).show(ui, |ui| {
            field(ui, "Available", format_money(BANK_ACCOUNT.available));
            field(ui, "Blocked", format_money(BANK_ACCOUNT.blocked));
            field(ui, "Annual interest", format!("{}%", BANK_ACCOUNT.annual_interest_pct));
            field(ui, "Monthly gain", format!("+{}", format_money(BANK_ACCOUNT.monthly_gain)));
            ui.end_row();
        });
        ui.horizontal(|ui| {
            ui.monospace(BANK_ACCOUNT.iban);
            if ui.button("Copy IBAN").clicked() {
                ui.output_mut(|o| o.copied_text = BANK_ACCOUNT.iban.to_string());
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Transfer money").clicked() {
            st.transfer_open = true;
        }
        if ui.button("Pay bills").clicked() {
            st.bills_open = true;
        }
        ui.add_enabled(false, egui::Button::new("Investments"));
        if ui.button("Full history").clicked() {
            tracing::info!(entries = TRANSACTIONS.len(), "demo transaction history requested");
        }
    });
    ui.add_space(8.0);

    let (income, expenses) = transaction_totals(TRANSACTIONS);
    card(ui, "Recent transactions", |ui| {
        ui.label(format!(
            "In: {}   Out: {}",
            format_money(income),
            format_money(expenses)
        ));
        ui.separator();
        for tx in TRANSACTIONS {
            let color = if tx.is_income() {
                egui::Color32::from_rgb(40, 160, 70)
            } else {
                ui.visuals().error_fg_color
            };
            let amount = if tx.is_income() {
                format!("+{}", format_money(tx.amount))
            } else {
                format_money(tx.amount)
            };
            let resp = ui
                .horizontal(|ui| {
                    ui.label(tx.description);
                    ui.weak(format!("{} • {}", tx.date, tx.category));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(color, amount);
                    });
                })
                .response
                .interact(egui::Sense::click());
            if resp.clicked() {
                st.expanded = if st.expanded == Some(tx.id) { None } else { Some(tx.id) };
            }
            if st.expanded == Some(tx.id) {
                ui.indent(tx.id, |ui| {
                    ui.weak(format!("Transaction #{}", tx.id));
                });
            }
        }
    });

    if st.transfer_open {
        transfer_window(ui.ctx(), st);
    }
    if st.bills_open {
        bills_window(ui.ctx(), st);
    }
}

fn transfer_window(ctx: &egui::Context, st: &mut BankState) {
    let mut open = st.transfer_open;
    let mut done = false;
    egui::Window::new("Transfer money")
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Recipient");
            ui.add(egui::TextEdit::singleline(&mut st.transfer.recipient).hint_text("IBAN or citizen ID"));
            ui.label("Amount");
            ui.add(egui::TextEdit::singleline(&mut st.transfer.amount).hint_text("0.00"));
            ui.label("Reason");
            ui.add(egui::TextEdit::singleline(&mut st.transfer.reason).hint_text("Transfer reason"));
            ui.horizontal(|ui| {
                let valid = !st.transfer.recipient.trim().is_empty()
                    && st.transfer.amount.trim().parse::<f64>().is_ok_and(|v| v > 0.0);
                if ui.add_enabled(valid, egui::Button::new("Send")).clicked() {
                    tracing::info!(
                        recipient = %st.transfer.recipient,
                        amount = %st.transfer.amount,
                        "demo transfer submitted"
                    );
                    done = true;
                }
                if ui.button("Cancel").clicked() {
                    done = true;
                }
            });
        });
    if done {
        st.transfer = TransferForm::default();
        open = false;
    }
    st.transfer_open = open;
}

fn bills_window(ctx: &egui::Context, st: &mut BankState) {
    let mut open = st.bills_open;
    egui::Window::new("Pay bills")
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .open(&mut open)
        .show(ctx, |ui| {
            for bill in PENDING_BILLS {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(bill.description);
                        ui.weak(format!("Due: {}", bill.due));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Pay").clicked() {
                            tracing::info!(bill = bill.id, "demo bill payment");
                        }
                        ui.label(format_money(bill.amount));
                    });
                });
                ui.separator();
            }
            ui.label(format!("Total due: {}", format_money(bills_total(PENDING_BILLS))));
        });
    st.bills_open = open;
}
