//! # Layout Components
//!
//! Reusable layout patterns for consistent page organization

use crate::ui::theme::Theme;

/// Render horizontally centered content below a top margin
pub fn render_centered<F>(ui: &mut egui::Ui, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        content(ui);
    });
}

/// Render a card with a heading
pub fn render_card<F>(ui: &mut egui::Ui, heading: &str, theme: &Theme, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Frame::group(ui.style())
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(heading).size(18.0).strong());
            ui.add_space(8.0);
            content(ui);
        });
}
