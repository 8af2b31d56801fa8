//! # GUI Rendering
//!
//! Renders the single greeter page with egui and hosts the [`App`] inside
//! eframe via [`DappWindow`].

pub mod page;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Repaint interval while background work may deliver results
const POLL_REPAINT: Duration = Duration::from_millis(250);

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    let theme = Theme::default();

    // Render from a snapshot so no lock is held while drawing
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(8.0);
        page::render_header(ui, &state, app, &theme);
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(12.0);
            page::render_body(ui, &state, app, &theme);
            ui.add_space(20.0);
        });
    });

    if let Some(message) = state.alerts.front() {
        if widgets::alert::render_alert(ctx, message, &theme) {
            app.dismiss_alert();
        }
    }

    notifications.push_all(app.take_notifications());
    notifications.show(ctx);
}

/// eframe host for the page
pub struct DappWindow {
    app: App,
    notifications: NotificationManager,
}

impl DappWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for DappWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app, &mut self.notifications);
        ctx.request_repaint_after(POLL_REPAINT);
    }
}

impl Drop for DappWindow {
    fn drop(&mut self) {
        self.app.shutdown();
    }
}
