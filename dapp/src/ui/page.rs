//! # Greeter Page
//!
//! Header with the connect control, then one of three bodies depending on
//! [`PageView`]: a connect prompt, the wrong-network banner, or the wallet,
//! signing and greeter panels.

use crate::app::{App, AppState, PageView, TxLifecycle};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};
use shared::truncate_address;

pub const PAGE_TITLE: &str = "Base dApp";

/// Header bar: title on the left, connect/disconnect on the right
pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(PAGE_TITLE).size(22.0).strong().color(theme.accent));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &state.account.address {
                Some(address) => {
                    if ui.button("Disconnect").clicked() {
                        app.handle_wallet_disconnect_click();
                    }
                    ui.monospace(truncate_address(address));
                    if let Some(chain) = &state.account.chain {
                        ui.label(egui::RichText::new(&chain.name).color(theme.dim));
                    }
                }
                None => {
                    let button = egui::Button::new("Connect Wallet").fill(theme.accent);
                    if ui.add_enabled(!state.connecting, button).clicked() {
                        app.handle_wallet_connect_click();
                    }
                }
            }
        });
    });
}

/// Page body below the header
pub fn render_body(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    match state.page_view() {
        PageView::Disconnected => render_disconnected(ui, theme),
        PageView::WrongNetwork { current, required } => {
            render_wrong_network(ui, current.as_deref(), &required, theme)
        }
        PageView::Ready => {
            render_wallet_overview(ui, state, theme);
            ui.add_space(12.0);
            render_signing_panel(ui, state, app, theme);
            ui.add_space(12.0);
            render_greeter_panel(ui, state, app, theme);
        }
    }
}

fn render_disconnected(ui: &mut egui::Ui, theme: &Theme) {
    layouts::render_centered(ui, |ui| {
        ui.label(egui::RichText::new("Connect your wallet to get started").size(18.0));
        ui.add_space(6.0);
        forms::render_hint(
            ui,
            "Set DAPP_PRIVATE_KEY or DAPP_KEY_FILE, then press Connect Wallet.",
            theme,
        );
    });
}

fn render_wrong_network(ui: &mut egui::Ui, current: Option<&str>, required: &str, theme: &Theme) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(60, 20, 20))
        .stroke(egui::Stroke::new(1.0, theme.error))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("Wrong Network! Please switch to {}.", required))
                    .size(16.0)
                    .strong()
                    .color(theme.error),
            );
            ui.label(format!(
                "Current: {} | Required: {}",
                current.unwrap_or("Unknown"),
                required
            ));
        });
}

fn render_wallet_overview(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    layouts::render_card(ui, "Wallet", theme, |ui| {
        egui::Grid::new("wallet_overview")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Address").color(theme.dim));
                ui.monospace(state.account.address.as_deref().unwrap_or_default());
                ui.end_row();

                ui.label(egui::RichText::new("Network").color(theme.dim));
                ui.label(state.account.chain.as_ref().map(|c| c.name.as_str()).unwrap_or_default());
                ui.end_row();

                ui.label(egui::RichText::new("Balance").color(theme.dim));
                // Nothing until the first balance arrives
                ui.label(state.account.balance_display().unwrap_or_default());
                ui.end_row();
            });
    });
}

fn render_signing_panel(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    layouts::render_card(ui, "Sign Message", theme, |ui| {
        let mut message = state.drafts.message.clone();
        if forms::render_text_input(ui, "Message", &mut message, "Enter a message to sign").changed() {
            app.handle_message_input(message);
        }
        ui.add_space(6.0);

        let signing = state.signing.is_signing;
        let label = if signing { "Signing..." } else { "Sign Message" };
        if forms::render_action_button(ui, label, !signing, signing, theme).clicked() {
            app.handle_sign_click();
        }

        if let Some(signature) = &state.signing.signature {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Signature").color(theme.dim));
            ui.add(egui::Label::new(egui::RichText::new(signature).monospace().size(12.0)).wrap());
        }
        if let Some(error) = &state.signing.error {
            forms::render_error(ui, error, theme);
        }
    });
}

fn render_greeter_panel(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let greeter = &state.greeter;

    layouts::render_card(ui, "Greeter Contract", theme, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Current greeting:").color(theme.dim));
            match &greeter.greeting {
                Some(greeting) => ui.label(egui::RichText::new(greeting).size(16.0).strong()),
                None => ui.label("Loading..."),
            };
        });
        if let Some(error) = &greeter.read_error {
            forms::render_error(ui, error, theme);
        }
        ui.add_space(8.0);

        let mut draft = state.drafts.new_greeting.clone();
        if forms::render_text_input(ui, "New greeting", &mut draft, "Enter a new greeting").changed() {
            app.handle_greeting_input(draft);
        }
        ui.add_space(6.0);

        let control = state.update_control();
        let label = if greeter.is_write_pending {
            "Confirm in wallet..."
        } else if greeter.is_confirming {
            "Confirming..."
        } else {
            "Update Greeting"
        };
        if forms::render_action_button(ui, label, control.is_enabled(), control.is_busy(), theme).clicked() {
            app.handle_set_greeting_click();
        }

        render_transaction_status(ui, state, theme);
    });
}

fn render_transaction_status(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let greeter = &state.greeter;

    match greeter.lifecycle() {
        TxLifecycle::Idle | TxLifecycle::Submitting => {}
        TxLifecycle::Submitted(_) | TxLifecycle::Confirming(_) => {
            ui.label(egui::RichText::new("Waiting for confirmation...").color(theme.warning));
        }
        TxLifecycle::Confirmed(_) => {
            ui.label(egui::RichText::new("Transaction confirmed!").color(theme.success));
        }
        TxLifecycle::Failed(error) => forms::render_error(ui, &error, theme),
    }

    if let (Some(hash), Some(url)) = (&greeter.transaction_hash, state.transaction_url()) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Transaction:").color(theme.dim));
            ui.hyperlink_to(truncate_address(hash), url);
            if let Some(at) = greeter.submitted_at {
                ui.label(egui::RichText::new(at.format("%H:%M:%S").to_string()).color(theme.dim));
            }
        });
    }
}
