use asciify::{AsciiArt, CharacterRamp, ConversionConfig, RampPreset, render_ascii};
use eframe::egui;
use image::RgbaImage;
use std::path::Path;
use std::time::{Duration, Instant};

/// How long the copy button shows its "Copied!" confirmation
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Main application state for the image-to-ASCII GUI
///
/// The currently loaded bitmap is the only state carried across
/// conversions; everything else is recomputed from the controls.
pub struct AsciiApp {
    /// Decoded source image for the current session
    source: Option<RgbaImage>,
    /// Display name of the loaded file
    source_name: Option<String>,

    /// Output width in characters (slider-bounded)
    target_width: u32,
    /// Selected ramp preset
    preset: RampPreset,
    /// Invert the brightness mapping
    invert: bool,

    /// Latest conversion result
    art: Option<AsciiArt>,
    /// Flag indicating parameters have changed and reconversion is needed
    needs_reconvert: bool,

    /// Last conversion time in milliseconds
    last_convert_ms: f64,
    /// When the art was last copied to the clipboard, for button feedback
    copied_at: Option<Instant>,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            source: None,
            source_name: None,
            target_width: 100,
            preset: RampPreset::Standard,
            invert: false,
            art: None,
            needs_reconvert: false,
            last_convert_ms: 0.0,
            copied_at: None,
            error_message: None,
        }
    }
}

impl AsciiApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load and decode an image from a file path
    ///
    /// Decode failures never reach the conversion core; they are reported
    /// here and the previous session image is kept.
    pub fn load_image(&mut self, path: &Path) {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                log::info!("loaded {} ({width}x{height})", path.display());

                self.source = Some(rgba);
                self.source_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                self.needs_reconvert = true;
                self.error_message = None;
            }
            Err(e) => {
                log::error!("decode failed for {}: {e}", path.display());
                self.error_message = Some(format!("Failed to load image: {e}"));
            }
        }
    }

    /// Save the current ASCII art as plain text
    pub fn save_art(&self, path: &Path) -> Result<(), String> {
        match &self.art {
            Some(art) => std::fs::write(path, art.text())
                .map_err(|e| format!("Failed to save: {e}")),
            None => Err("No ASCII art to save".to_string()),
        }
    }

    /// Run one conversion with the current controls
    fn convert(&mut self) {
        let Some(ref source) = self.source else {
            return;
        };

        let config = ConversionConfig {
            target_width: self.target_width,
            ramp: CharacterRamp::from(self.preset),
            invert: self.invert,
        };

        let start = Instant::now();
        match render_ascii(source, &config) {
            Ok(art) => {
                self.last_convert_ms = start.elapsed().as_secs_f64() * 1000.0;
                log::debug!(
                    "converted to {}x{} in {:.1} ms",
                    art.width(),
                    art.height(),
                    self.last_convert_ms
                );
                self.art = Some(art);
                self.error_message = None;
            }
            Err(e) => {
                log::error!("conversion failed: {e}");
                self.error_message = Some(format!("Conversion failed: {e}"));
            }
        }
        self.needs_reconvert = false;
    }

    /// Handle files dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next()
            && let Some(path) = file.path
        {
            self.load_image(&path);
        }
    }

    /// Open the native file picker and load the chosen image
    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    /// Open the native save dialog, defaulting to ascii-art.txt
    fn save_art_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("ascii-art.txt")
            .add_filter("Text", &["txt"])
            .save_file()
            && let Err(e) = self.save_art(&path)
        {
            self.error_message = Some(e);
        }
    }

    /// Render the control panel UI, returns true if any parameter changed
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        changed |= ui
            .add(egui::Slider::new(&mut self.target_width, 20..=300).text("Width"))
            .on_hover_text("Output width in characters")
            .changed();

        ui.add_space(8.0);

        egui::ComboBox::from_label("Character Set")
            .selected_text(self.preset.label())
            .show_ui(ui, |ui| {
                for preset in RampPreset::ALL {
                    changed |= ui
                        .selectable_value(&mut self.preset, preset, preset.label())
                        .changed();
                }
            });

        ui.add_space(8.0);

        changed |= ui
            .checkbox(&mut self.invert, "Invert Brightness")
            .on_hover_text("Map dark areas to bright glyphs and vice versa")
            .changed();

        ui.add_space(16.0);
        ui.separator();

        if let Some(ref name) = self.source_name {
            ui.label(format!("File: {name}"));
        }
        if let Some(ref source) = self.source {
            let (w, h) = source.dimensions();
            ui.label(format!("Source: {w}x{h} px"));
        }
        if let Some(ref art) = self.art {
            ui.label(format!("Output: {}x{} chars", art.width(), art.height()));
        }
        if self.last_convert_ms > 0.0 {
            ui.label(format!("Last convert: {:.1} ms", self.last_convert_ms));
        }

        changed
    }

    /// Render the output area: action buttons plus the scrollable art view
    fn render_output(&mut self, ui: &mut egui::Ui) {
        let Some(art) = self.art.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label("Drop an image here, or use File > Open Image...");
            });
            return;
        };

        ui.horizontal(|ui| {
            let copied_recently = self
                .copied_at
                .is_some_and(|at| at.elapsed() < COPY_FEEDBACK);
            let copy_label = if copied_recently { "Copied!" } else { "Copy to Clipboard" };

            if ui.button(copy_label).clicked() {
                ui.ctx().copy_text(art.text().to_owned());
                self.copied_at = Some(Instant::now());
            }

            if ui.button("Save as Text...").clicked() {
                self.save_art_dialog();
            }
        });

        ui.separator();

        egui::ScrollArea::both().show(ui, |ui| {
            ui.label(
                egui::RichText::new(art.text())
                    .monospace()
                    .size(10.0),
            );
        });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.open_image_dialog();
                        ui.close();
                    }

                    if ui.button("Save ASCII...").clicked() {
                        self.save_art_dialog();
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "Asciify\nImage to ASCII art converter\n\nBuilt with Rust + egui"
                                .to_string(),
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.render_controls(ui) {
                        self.needs_reconvert = true;
                    }
                });
            });

        // Reconvert synchronously whenever a parameter changed while an
        // image is loaded
        if self.needs_reconvert && self.source.is_some() {
            self.convert();
        }

        // Central panel: ASCII output
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = self.error_message.clone() {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
                ui.colored_label(egui::Color32::LIGHT_BLUE, "Drop image to load");
                ui.separator();
            }

            self.render_output(ui);
        });
    }
}
