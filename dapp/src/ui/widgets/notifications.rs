//! # Notifications Widget
//!
//! Toast notifications using egui-notify for transaction and signing status.

use egui_notify::Toasts;
use std::time::Duration;

use crate::app::{Notification, NotificationLevel};

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Errors stay up longer than the rest
    pub fn error(&mut self, message: String) {
        self.toasts
            .error(message)
            .duration(Some(Duration::from_secs(8)));
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Turn queued page notifications into toasts
    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            match notification.level {
                NotificationLevel::Info => self.info(notification.message),
                NotificationLevel::Success => self.success(notification.message),
                NotificationLevel::Warning => self.warning(notification.message),
                NotificationLevel::Error => self.error(notification.message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
