use {
    crate::{config::SEARCH, ui::UI_CONFIG},
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType, pos2,
    },
};

pub(crate) fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.heading)
}

pub(crate) trait UiStyleExt {
    /// Focusable two-line entry: transparent when idle, tinted on hover, blue when focused.
    fn result_entry(&mut self, title: &str, detail: &str, width: f32) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn result_entry(&mut self, title: &str, detail: &str, width: f32) -> Response {
        let padding = Vec2::splat(SEARCH.entry_padding);
        let title_galley = self.painter().layout_no_wrap(
            title.to_string(),
            FontId::proportional(SEARCH.label_font_size),
            UI_CONFIG.colors.label,
        );
        let detail_galley = self.painter().layout_no_wrap(
            detail.to_string(),
            FontId::proportional(SEARCH.detail_font_size),
            UI_CONFIG.colors.subdued,
        );

        let text_height = title_galley.size().y + 2.0 + detail_galley.size().y;
        let desired_size = Vec2::new(width, text_height + padding.y * 2.0);
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| {
            WidgetInfo::labeled(WidgetType::Button, true, format!("{} {}", title, detail))
        });

        if self.is_rect_visible(rect) {
            let (bg_fill, title_color) = if response.has_focus() {
                (UI_CONFIG.colors.entry_focus, Color32::WHITE)
            } else if response.hovered() {
                (UI_CONFIG.colors.entry_hover, Color32::YELLOW)
            } else {
                (Color32::TRANSPARENT, UI_CONFIG.colors.label)
            };

            if bg_fill != Color32::TRANSPARENT {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }

            let title_pos = rect.left_top() + padding;
            let detail_pos = pos2(title_pos.x, title_pos.y + title_galley.size().y + 2.0);
            self.painter().galley(title_pos, title_galley, title_color);
            self.painter()
                .galley(detail_pos, detail_galley, UI_CONFIG.colors.subdued);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }
}
