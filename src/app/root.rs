use {
    crate::{
        Cli,
        config::DF,
        domain::{AssetCategory, Catalog, Destination},
        search::SearchWidget,
        ui::{SearchBar, UI_CONFIG, UI_TEXT, UiStyleExt, colored_heading, navigate},
    },
    eframe::{
        Frame,
        egui::{CentralPanel, Context, RichText, TopBottomPanel, Visuals},
    },
    std::sync::Arc,
    strum::IntoEnumIterator,
};

pub struct App {
    search_bar: SearchBar,
    /// Absolute origin for tracker links. `None` keeps them relative (web build).
    tracker_base: Option<String>,
    last_opened: Option<Destination>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, catalog: Arc<Catalog>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        if DF.log_catalog {
            log::info!(
                "Catalog ready: {} assets ({} crypto, {} stocks)",
                catalog.len(),
                catalog.count_by_category(AssetCategory::Crypto),
                catalog.count_by_category(AssetCategory::Stocks),
            );
        }

        let widget = SearchWidget::with_limit(catalog, args.max_results);
        let mut search_bar = SearchBar::new("asset_search", widget);
        if let Some(query) = args.query {
            search_bar.set_query(query);
        }

        let tracker_base = if cfg!(target_arch = "wasm32") {
            None
        } else {
            Some(args.tracker_base_url)
        };

        Self {
            search_bar,
            tracker_base,
            last_opened: None,
        }
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(colored_heading(&UI_TEXT.app_title).strong().size(18.0));
                    ui.add_space(16.0);
                    if let Some(destination) = self.search_bar.show(ui) {
                        navigate(ui.ctx(), &destination, self.tracker_base.as_deref());
                        self.last_opened = Some(destination);
                    }
                });
            });
    }

    fn render_central_panel(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let catalog = self.search_bar.widget().catalog();
                ui.label(colored_heading(&UI_TEXT.catalog_heading));
                for category in AssetCategory::iter() {
                    ui.metric(
                        &category.label(),
                        &catalog.count_by_category(category).to_string(),
                        UI_CONFIG.colors.label,
                    );
                }
                ui.metric(
                    &UI_TEXT.label_tracker,
                    self.tracker_base.as_deref().unwrap_or(UI_TEXT.label_this_site.as_str()),
                    UI_CONFIG.colors.link,
                );

                ui.add_space(8.0);
                let last = match &self.last_opened {
                    Some(dest) => format!("{} {}", UI_TEXT.icon_link, dest),
                    None => UI_TEXT.label_nothing_opened.clone(),
                };
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("{}:", UI_TEXT.label_last_opened));
                    ui.label(RichText::new(last).small().color(UI_CONFIG.colors.link));
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
