//! # Blocking Alert
//!
//! Modal dialog for the front entry of the page's alert queue. Nothing behind
//! it can be clicked until it is dismissed.

use crate::ui::theme::Theme;

/// Render the modal. Returns `true` when the user dismissed it this frame.
pub fn render_alert(ctx: &egui::Context, message: &str, theme: &Theme) -> bool {
    let mut dismissed = false;

    let response = egui::Modal::new(egui::Id::new("blocking_alert")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.add_space(4.0);
        ui.label(egui::RichText::new(message).size(16.0).color(theme.warning));
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    // Escape or a click on the backdrop also closes it
    dismissed || response.should_close()
}
