//! # Form Components
//!
//! Reusable form elements for consistent UI across panels

use crate::ui::theme::Theme;

/// Render a labelled single-line text input
pub fn render_text_input(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

/// Render a primary button, or a disabled one with a spinner when `busy`.
pub fn render_action_button(
    ui: &mut egui::Ui,
    text: &str,
    enabled: bool,
    busy: bool,
    theme: &Theme,
) -> egui::Response {
    ui.horizontal(|ui| {
        let mut button = egui::Button::new(egui::RichText::new(text).size(15.0).strong())
            .min_size(egui::vec2(160.0, 32.0));
        if enabled {
            button = button.fill(theme.accent);
        }
        let response = ui.add_enabled(enabled, button);
        if busy {
            ui.spinner();
        }
        response
    })
    .inner
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(13.0).color(theme.error));
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}
