//! UI rendering methods for the photo viewer application.

use crate::PhotoViewerApp;
use crate::assets::image_uri;
use crate::constants::CONTROLS_HINT;
use eframe::egui;
use egui::load::{SizeHint, SizedTexture, TexturePoll};
use egui::scroll_area::ScrollSource;
use photo_viewer::ViewerEvent;

impl PhotoViewerApp {
    /// Handles keyboard shortcuts for the zoom actions.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if !self.viewer.surface().controls_visible {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                self.events.push(ViewerEvent::ZoomIn);
            }
            if i.key_pressed(egui::Key::Minus) {
                self.events.push(ViewerEvent::ZoomOut);
            }
            if i.key_pressed(egui::Key::Num0) {
                self.events.push(ViewerEvent::OriginalSize);
            }
            if i.key_pressed(egui::Key::F) {
                self.events.push(ViewerEvent::FitToWindow);
            }
        });
    }

    /// Opens the last file dropped onto the window.
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.last().and_then(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.events
                .push(ViewerEvent::ImageUrl(image_uri(&path.to_string_lossy())));
        }
    }

    /// Renders the zoom buttons once an image has been set.
    pub fn show_toolbar(&mut self, ctx: &egui::Context) {
        if !self.viewer.surface().controls_visible {
            return;
        }

        egui::TopBottomPanel::top("zoom_utilities").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Fit").on_hover_text("Fit to window (F)").clicked() {
                    self.events.push(ViewerEvent::FitToWindow);
                }
                if ui.button("−").on_hover_text("Zoom out (-)").clicked() {
                    self.events.push(ViewerEvent::ZoomOut);
                }
                if ui.button("+").on_hover_text("Zoom in (+)").clicked() {
                    self.events.push(ViewerEvent::ZoomIn);
                }
                if ui.button("1:1").on_hover_text("Original size (0)").clicked() {
                    self.events.push(ViewerEvent::OriginalSize);
                }

                if let Some(percent) = self.viewer.zoom().display_percent() {
                    ui.separator();
                    ui.label(format!("{percent:.0}%"));
                }
            });
        });
    }

    /// Renders the bottom status bar with controls hint and image info.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(CONTROLS_HINT);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(natural) = self.viewer.zoom().image() {
                        ui.label(format!("{} × {}", natural.width, natural.height));
                    }
                    if let Some(source) = self.viewer.source() {
                        ui.label(source.rsplit('/').next().unwrap_or(source));
                    }
                });
            });
        });
    }

    /// Renders the central panel containing the image.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let viewport_rect = ui.max_rect();
            self.events.observe_container(viewport_rect.size());

            let Some(texture) = self.poll_image(ctx) else {
                if self.viewer.source().is_some() && !self.viewer.surface().load_failed {
                    ui.centered_and_justified(|ui| ui.spinner());
                }
                return;
            };

            if self.viewer.is_loaded() {
                self.handle_scroll_zoom(ui, viewport_rect);
            }

            let Some(size) = self.viewer.surface().display_size else {
                return;
            };

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .scroll_source(ScrollSource {
                    scroll_bar: true,
                    drag: true,
                    mouse_wheel: false,
                })
                .show(ui, |ui| {
                    ui.add(egui::Image::from_texture(texture).fit_to_exact_size(size));
                });
        });
    }

    /// Polls the loader for the current image and reports its natural size to
    /// the viewer the first time it is available.
    fn poll_image(&mut self, ctx: &egui::Context) -> Option<SizedTexture> {
        let source = self.viewer.surface().source.clone()?;

        match ctx.try_load_texture(
            &source,
            egui::TextureOptions::LINEAR,
            SizeHint::default(),
        ) {
            Ok(TexturePoll::Ready { texture }) => {
                let surface = self.viewer.surface_mut();
                if !surface.load_reported {
                    surface.load_reported = true;
                    self.events.push(ViewerEvent::ImageLoaded {
                        source,
                        width: texture.size.x.round() as u32,
                        height: texture.size.y.round() as u32,
                    });
                }
                Some(texture)
            }
            Ok(TexturePoll::Pending { .. }) => None,
            Err(err) => {
                let surface = self.viewer.surface_mut();
                if !surface.load_failed {
                    surface.load_failed = true;
                    log::error!("Failed to load {source}: {err}");
                    self.show_error(format!("Failed to load {source}: {err}"));
                }
                None
            }
        }
    }

    /// Turns wheel scrolling over the image area into zoom steps.
    fn handle_scroll_zoom(&mut self, ui: &egui::Ui, viewport_rect: egui::Rect) {
        let hover_pos = ui.input(|i| i.pointer.hover_pos());
        let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);

        if scroll_delta == 0.0 || !hover_pos.is_some_and(|p| viewport_rect.contains(p)) {
            return;
        }

        self.events.push(ViewerEvent::Wheel {
            delta: scroll_delta,
        });
    }
}
