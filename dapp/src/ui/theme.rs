//! # GUI Theme
//!
//! Dark theme with Base blue accents for egui.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Clone)]
pub struct DappColors {
    /// Near-black background
    pub background: Color32,
    /// Card background
    pub surface: Color32,
    pub text: Color32,
    /// Base blue (primary accent)
    pub blue_primary: Color32,
    /// Blue highlight for hover/selection
    pub blue_highlight: Color32,
    pub border: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub yellow_warning: Color32,
    pub gray_secondary: Color32,
}

impl Default for DappColors {
    fn default() -> Self {
        DappColors {
            background: Color32::from_rgb(10, 11, 13),         // #0A0B0D
            surface: Color32::from_rgb(22, 24, 29),            // #16181D
            text: Color32::from_rgb(240, 242, 245),            // #F0F2F5
            blue_primary: Color32::from_rgb(0, 82, 255),       // #0052FF - Base blue
            blue_highlight: Color32::from_rgb(87, 139, 250),   // #578BFA
            border: Color32::from_rgb(50, 53, 61),             // #32353D
            green_success: Color32::from_rgb(39, 174, 96),     // #27AE60
            red_error: Color32::from_rgb(235, 87, 87),         // #EB5757
            yellow_warning: Color32::from_rgb(242, 201, 76),   // #F2C94C
            gray_secondary: Color32::from_rgb(138, 145, 158),  // #8A919E
        }
    }
}

/// Semantic colors used by the page
pub struct Theme {
    pub colors: DappColors,
    pub normal: Color32,
    /// Primary buttons and headings
    pub accent: Color32,
    pub border: Color32,
    /// Secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub background: Color32,
    pub surface: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = DappColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            accent: colors.blue_primary,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            background: colors.background,
            surface: colors.surface,
        }
    }
}

impl Theme {
    pub fn dapp_visuals() -> Visuals {
        let colors = DappColors::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 33, 40);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(20, 40, 90);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.blue_highlight);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(24, 36, 70);

        visuals.widgets.active.bg_fill = colors.blue_primary;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.blue_highlight);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(0, 60, 190);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0, 82, 255, 90);
        visuals.selection.stroke = Stroke::new(1.5, colors.blue_highlight);

        visuals.hyperlink_color = colors.blue_highlight;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` for both light and dark so a system theme switch
    /// does not bring back the default look.
    pub fn apply(ctx: &Context) {
        let visuals = Self::dapp_visuals();

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied dApp theme");
    }
}
