use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use egui::Context;
use log::{error, info, warn};

use kw_gen_core::error::KeywordError;
use kw_gen_core::export::{
    copied_all_message, copied_one_message, copy_all_text, export_to_dir, exported_message,
    ExportFormat, NOTIFICATION_TIMEOUT,
};
use kw_gen_core::model::generator::GeneratedKeywords;
use kw_gen_core::model::request::{
    parse_count, GenerationRequest, DEFAULT_COUNT, DEMO_DESCRIPTION, DEMO_TOPIC,
};
use reqwest::blocking::Client;
use reqwest::Result;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a GET request to `/v1/generate` for a validated request.
    fn get_generated(&self, request: &GenerationRequest) -> Result<GeneratedKeywords> {
        let count = request.count().to_string();
        let response = self.client
            .get(format!("{}/v1/generate", self.base_url))
            .query(&[
                ("topic", request.topic()),
                ("description", request.description()),
                ("count", count.as_str()),
            ])
            .send()?
            .error_for_status()?;

        response.json()
    }

    /// Sends a GET request to `/v1/categories`.
    fn get_categories(&self) -> Result<String> {
        let response = self.client
            .get(format!("{}/v1/categories", self.base_url))
            .send()?
            .error_for_status()?;

        response.text()
    }
}

/// Transient message shown at the bottom of the window.
struct Notification {
    message: String,
    shown_at: Instant,
}

impl Notification {
    fn new(message: String) -> Self {
        Self { message, shown_at: Instant::now() }
    }

    /// Time left before the notification disappears.
    fn remaining(&self, now: Instant) -> Option<Duration> {
        NOTIFICATION_TIMEOUT.checked_sub(now.saturating_duration_since(self.shown_at))
            .filter(|d| !d.is_zero())
    }
}

/// Global UI state (MUST persist between frames in egui).
struct KeywordUI {
    rest: RESTContext,

    topic: String,
    description: String,
    count: String,

    // None while the results section is hidden
    results: Option<GeneratedKeywords>,
    categories: Vec<String>,
    notification: Option<Notification>,
}

impl KeywordUI {
    /// Initializes the UI with the demo input and fetches the categories.
    fn new() -> Result<Self> {
        let base_url = std::env::var("KW_GEN_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_owned());
        let mut ui = Self::with_rest(RESTContext::new(base_url)?);
        ui.get_categories();
        Ok(ui)
    }

    fn with_rest(rest: RESTContext) -> Self {
        Self {
            rest,
            topic: DEMO_TOPIC.to_owned(),
            description: DEMO_DESCRIPTION.to_owned(),
            count: DEFAULT_COUNT.to_string(),
            results: None,
            categories: Vec::new(),
            notification: None,
        }
    }

    fn notify(&mut self, message: String) {
        self.notification = Some(Notification::new(message));
    }

    /// Keywords currently displayed (empty when hidden).
    fn keywords(&self) -> &[String] {
        self.results.as_ref().map(|r| r.keywords.as_slice()).unwrap_or(&[])
    }

    /// Validates the form then performs the generation request.
    fn generate(&mut self) {
        let request = match parse_count(&self.count)
            .and_then(|count| GenerationRequest::new(&self.topic, &self.description, count))
        {
            Ok(request) => request,
            Err(KeywordError::InvalidInput(message)) => return self.notify(message),
            Err(e) => return self.notify(e.to_string()),
        };

        match self.rest.get_generated(&request) {
            Ok(result) => self.results = Some(result),
            Err(e) => {
                error!("Failed to generate keywords: {e}");
                self.notify(format!("Error: {e}"));
            }
        }
    }

    /// Performs the get categories request.
    fn get_categories(&mut self) {
        match self.rest.get_categories() {
            Ok(text) => self.categories = text.lines().map(|s| s.trim().to_owned()).collect(),
            Err(e) => warn!("Failed to get categories: {e}"),
        }
    }

    fn copy_single(&mut self, ctx: &Context, keyword: String) {
        ctx.copy_text(keyword);
        self.notify(copied_one_message());
    }

    fn copy_all(&mut self, ctx: &Context) {
        let message = match copy_all_text(self.keywords()) {
            Ok(text) => {
                ctx.copy_text(text);
                copied_all_message(self.keywords().len())
            }
            Err(e) => e.to_string(),
        };
        self.notify(message);
    }

    /// Writes `keywords.csv` / `keywords.txt` in the working directory.
    fn export(&mut self, format: ExportFormat) {
        let message = match export_to_dir(".", format, self.keywords()) {
            Ok(path) => {
                info!("Keywords written to {}", path.display());
                exported_message(self.keywords().len(), format)
            }
            Err(e @ KeywordError::NothingToActOn(_)) => e.to_string(),
            Err(e) => {
                error!("Failed to export keywords: {e}");
                format!("Export failed: {e}")
            }
        };
        self.notify(message);
    }

    /// Resets the form to its defaults and hides the results.
    fn clear_all(&mut self) {
        self.topic.clear();
        self.description.clear();
        self.count = DEFAULT_COUNT.to_string();
        self.clear_results();
    }

    fn clear_results(&mut self) {
        self.results = None;
    }
}

impl eframe::App for KeywordUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let now = Instant::now();
        match self.notification.as_ref().and_then(|n| n.remaining(now)) {
            Some(left) => ctx.request_repaint_after(left),
            None => self.notification = None,
        }

        if let Some(notification) = &self.notification {
            egui::TopBottomPanel::bottom("notification").show(ctx, |ui| {
                ui.label(notification.message.as_str());
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("keyword_form")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Topic");
                    ui.text_edit_singleline(&mut self.topic);
                    ui.end_row();

                    ui.label("Description");
                    ui.text_edit_multiline(&mut self.description);
                    ui.end_row();

                    ui.label("Number of keywords");
                    ui.text_edit_singleline(&mut self.count);
                    ui.end_row();

                    if !self.categories.is_empty() {
                        ui.label("Known categories");
                        ui.label(self.categories.join(", "));
                        ui.end_row();
                    }
                });

            ui.horizontal(|ui| {
                if ui.add_sized([160.0, 32.0], egui::Button::new("Generate")).clicked() {
                    self.generate();
                }
                if ui.button("Clear all").clicked() {
                    self.clear_all();
                }
            });

            ui.separator();

            let Some(result) = &self.results else {
                ui.label("Click Generate to start");
                return;
            };

            let stats = result.stats;
            ui.horizontal(|ui| {
                ui.label(format!("Total: {}", stats.total));
                ui.label(format!("Long-tail: {}", stats.long_tail));
                ui.label(format!("Average length: {}", stats.avg_length));
            });

            // Clicking a keyword copies it
            let mut clicked: Option<String> = None;
            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for keyword in &result.keywords {
                        if ui.button(keyword.as_str()).clicked() {
                            clicked = Some(keyword.clone());
                        }
                    }
                });
            });
            if let Some(keyword) = clicked {
                self.copy_single(ctx, keyword);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Copy all").clicked() {
                    self.copy_all(ctx);
                }
                if ui.button("Export CSV").clicked() {
                    self.export(ExportFormat::Csv);
                }
                if ui.button("Export TXT").clicked() {
                    self.export(ExportFormat::Txt);
                }
                if ui.button("Clear results").clicked() {
                    self.clear_results();
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "kw-generator",
        options,
        Box::new(|_| Ok(Box::new(KeywordUI::new()?))),
    )
}
