#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod constants;
mod surface;
mod ui;

use clap::Parser;
use constants::{ERROR_TOAST_SECONDS, WINDOW_SIZE};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use photo_viewer::{PhotoViewer, ViewerConfig, ViewerEvent};
use std::path::PathBuf;
use surface::{EguiSurface, FrameEvents};

/// View an image with fit-to-window, original size and stepped zoom.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image to open, as a path or a URI
    image: Option<String>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Main application state for the photo viewer.
pub struct PhotoViewerApp {
    viewer: PhotoViewer<EguiSurface>,
    events: FrameEvents,
    toasts: Toasts,
}

impl PhotoViewerApp {
    fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let (config, config_error) = match ViewerConfig::load_or_default(args.config.as_deref()) {
            Ok(config) => (config, None),
            Err(err) => {
                log::error!("{err}");
                (ViewerConfig::default(), Some(err.to_string()))
            }
        };

        let mut app = Self {
            viewer: PhotoViewer::new(&config, EguiSurface::default()),
            events: FrameEvents::default(),
            toasts,
        };

        if let Some(err) = config_error {
            app.show_error(err);
        }

        if let Err(err) = assets::register_placeholder(&cc.egui_ctx) {
            log::error!("{err}");
            app.show_error(err.to_string());
        }

        let source = assets::startup_source(args.image.as_deref(), &config);
        app.events.push(ViewerEvent::ImageUrl(source));
        app
    }

    fn show_error(&mut self, text: String) {
        self.toasts.add(Toast {
            kind: ToastKind::Error,
            text: text.into(),
            options: ToastOptions::default()
                .duration_in_seconds(ERROR_TOAST_SECONDS)
                .show_icon(true),
            ..Default::default()
        });
    }

    /// Dispatches the events gathered this frame.
    fn dispatch_events(&mut self, ctx: &egui::Context) {
        if self.events.is_empty() {
            return;
        }

        self.viewer.pump(&mut self.events);
        ctx.request_repaint();
    }
}

impl eframe::App for PhotoViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_keyboard_input(ctx);
        self.dispatch_events(ctx);

        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.dispatch_events(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Viewer",
        options,
        Box::new(|cc| Ok(Box::new(PhotoViewerApp::new(cc, args)))),
    )
}
