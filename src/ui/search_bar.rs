//! egui adapter over `SearchWidget`: turns input/focus/pointer/key events into widget calls.
use {
    crate::{
        config::{DF, SEARCH},
        domain::Destination,
        search::{PointerTarget, SearchWidget},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{
        Area, Context, Id, Key, OpenUrl, Order, Rect, RichText, Sense, TextEdit, Ui, vec2,
    },
};

pub struct SearchBar {
    id: Id,
    text: String,
    widget: SearchWidget,
}

impl SearchBar {
    pub fn new(id_salt: &str, widget: SearchWidget) -> Self {
        Self {
            id: Id::new(id_salt),
            text: String::new(),
            widget,
        }
    }

    /// Programmatic input, as if typed.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.widget.handle_query_change(&self.text);
    }

    pub fn widget(&self) -> &SearchWidget {
        &self.widget
    }

    /// Draws input + results. Returns the destination of an activated entry.
    pub fn show(&mut self, ui: &mut Ui) -> Option<Destination> {
        let row = ui.horizontal(|ui| {
            ui.label(RichText::new(&UI_TEXT.icon_search).color(UI_CONFIG.colors.subdued));
            ui.add(
                TextEdit::singleline(&mut self.text)
                    .id(self.id)
                    .hint_text(&UI_TEXT.search_hint)
                    .desired_width(SEARCH.input_width),
            )
            .on_hover_text(&UI_TEXT.search_hover)
        });
        let input = row.inner;

        // Focus re-shows matches for whatever is already typed
        if input.changed() || input.gained_focus() {
            self.widget.handle_query_change(&self.text);
        }

        let mut container = row.response.rect;
        let mut activated = None;

        if self.widget.is_visible() {
            // Hover only: a clickable area is a Tab stop ahead of the first entry.
            let area = Area::new(self.id.with("results"))
                .order(Order::Foreground)
                .sense(Sense::hover())
                .fixed_pos(input.rect.left_bottom() + vec2(0.0, 2.0));

            let results = self.widget.results();
            let area_response = area.show(ui.ctx(), |ui| {
                UI_CONFIG.results_frame(ui.style()).show(ui, |ui| {
                    ui.set_width(SEARCH.popup_width);
                    ui.spacing_mut().item_spacing.y = 0.0;
                    for (index, asset) in results.iter().enumerate() {
                        let response =
                            ui.result_entry(asset.label(), &asset.detail(), SEARCH.popup_width);
                        let entered = response.has_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                        if response.clicked() || entered {
                            activated = Some(index);
                        }
                    }
                });
            });
            container = container.union(area_response.response.rect);
        }

        if ui.input(|i| i.pointer.primary_clicked()) {
            let pos = ui.input(|i| i.pointer.interact_pos());
            self.widget
                .handle_outside_interaction(pointer_target(container, pos));
        }

        activated.and_then(|index| self.widget.activate(index).cloned())
    }
}

fn pointer_target(container: Rect, pos: Option<eframe::egui::Pos2>) -> PointerTarget {
    match pos {
        Some(pos) if container.contains(pos) => PointerTarget::Inside,
        _ => PointerTarget::Outside,
    }
}

/// Sends the browsing context to the tracker page. On the web `base` is `None` and the
/// link stays relative to the hosting page.
pub fn navigate(ctx: &Context, destination: &Destination, base: Option<&str>) {
    let url = destination.url(base);
    if DF.log_navigation {
        log::info!("Navigating to {}", url);
    }
    ctx.open_url(OpenUrl::same_tab(url));
}
