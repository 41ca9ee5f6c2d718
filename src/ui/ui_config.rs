use eframe::egui::{Color32, Frame, Margin, Stroke, Style};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub entry_hover: Color32,
    pub entry_focus: Color32,
    pub popup_border: Color32,
    pub link: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::YELLOW,
        subdued: Color32::GRAY,
        entry_hover: Color32::from_rgb(45, 45, 60),
        entry_focus: Color32::from_rgb(30, 60, 110),
        popup_border: Color32::from_rgb(70, 70, 90),
        link: Color32::from_rgb(100, 200, 255), // Light Blue for links
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame around the result list popup
    pub fn results_frame(&self, style: &Style) -> Frame {
        Frame::popup(style)
            .stroke(Stroke::new(1.0, self.colors.popup_border))
            .inner_margin(4.0)
    }
}
