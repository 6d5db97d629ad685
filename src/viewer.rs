//! Event dispatch between the host, the zoom controller and the surface the
//! image is drawn on.

use crate::config::ViewerConfig;
use crate::event::{EventSource, ViewerEvent};
use crate::zoom::{DisplaySize, ZoomController};

/// Where the viewer draws. Implemented by the host.
pub trait RenderSurface {
    /// Starts displaying the image at `source`. The host reports the natural
    /// size back with [`ViewerEvent::ImageLoaded`] once it is known.
    fn show_image(&mut self, source: &str);

    /// Resizes the displayed image element.
    fn set_display_size(&mut self, size: DisplaySize);

    /// Shows or hides the zoom buttons.
    fn set_controls_visible(&mut self, visible: bool);
}

/// Image viewer driven by [`ViewerEvent`]s.
pub struct PhotoViewer<S> {
    zoom: ZoomController,
    surface: S,
    source: Option<String>,
}

impl<S: RenderSurface> PhotoViewer<S> {
    pub fn new(config: &ViewerConfig, surface: S) -> Self {
        Self::with_controller(config.controller(), surface)
    }

    pub fn with_controller(zoom: ZoomController, surface: S) -> Self {
        Self {
            zoom,
            surface,
            source: None,
        }
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Source of the image currently displayed, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether the natural size of the current image is known.
    pub fn is_loaded(&self) -> bool {
        self.zoom.image().is_some()
    }

    /// Dispatches every event currently available from `events`.
    pub fn pump(&mut self, mut events: impl EventSource) {
        while let Some(event) = events.next_event() {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::ImageUrl(source) => self.set_new_image(source),
            ViewerEvent::ImageLoaded {
                source,
                width,
                height,
            } => self.image_loaded(&source, width, height),
            ViewerEvent::ContainerResized { width, height } => {
                let size = self.zoom.set_container_size(width, height);
                self.apply(size);
            }
            ViewerEvent::FitToWindow => {
                let size = self.zoom.fit_to_window();
                self.apply(size);
            }
            ViewerEvent::ZoomIn => {
                let size = self.zoom.zoom_in();
                self.apply(size);
            }
            ViewerEvent::ZoomOut => {
                let size = self.zoom.zoom_out();
                self.apply(size);
            }
            ViewerEvent::OriginalSize => {
                let size = self.zoom.original_size();
                self.apply(size);
            }
            ViewerEvent::Wheel { delta } => self.wheel(delta),
        }
    }

    fn set_new_image(&mut self, source: String) {
        let source = source.trim();
        if source.is_empty() {
            log::debug!("Ignoring empty image source");
            return;
        }

        log::info!("Showing image {source}");
        self.zoom.clear_image();
        self.surface.show_image(source);
        self.surface.set_controls_visible(true);
        self.source = Some(source.to_owned());
    }

    fn image_loaded(&mut self, source: &str, width: u32, height: u32) {
        if self.source.as_deref() != Some(source) {
            log::debug!("Ignoring stale load of {source}");
            return;
        }

        log::info!("Loaded {source}: {width}x{height}");
        let size = self.zoom.set_image(width, height);
        self.apply(size);
    }

    fn wheel(&mut self, delta: f32) {
        if !self.is_loaded() {
            return;
        }

        let size = if delta < 0.0 {
            self.zoom.zoom_out()
        } else if delta > 0.0 {
            self.zoom.zoom_in()
        } else {
            None
        };
        self.apply(size);
    }

    fn apply(&mut self, size: Option<DisplaySize>) {
        if let Some(size) = size {
            self.surface.set_display_size(size);
        }
    }
}
