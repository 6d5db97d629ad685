//! egui implementations of the viewer's surface and event source.

use eframe::egui;
use photo_viewer::{DisplaySize, EventSource, RenderSurface, ViewerEvent};
use std::collections::VecDeque;

/// State of the image element, as set by the viewer and read when drawing.
#[derive(Debug, Default)]
pub struct EguiSurface {
    /// Loader URI of the image being shown
    pub source: Option<String>,
    /// Size to draw the image at; `None` until the viewer has sized it
    pub display_size: Option<egui::Vec2>,
    pub controls_visible: bool,
    /// Whether the natural size of `source` was already sent to the viewer
    pub load_reported: bool,
    /// Whether a load failure of `source` was already shown to the user
    pub load_failed: bool,
}

impl RenderSurface for EguiSurface {
    fn show_image(&mut self, source: &str) {
        self.source = Some(source.to_owned());
        self.display_size = None;
        self.load_reported = false;
        self.load_failed = false;
    }

    fn set_display_size(&mut self, size: DisplaySize) {
        self.display_size = Some(egui::vec2(size.width as f32, size.height as f32));
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }
}

/// Events collected while drawing a frame, dispatched at the end of it.
#[derive(Debug, Default)]
pub struct FrameEvents {
    queue: VecDeque<ViewerEvent>,
    container: Option<(u32, u32)>,
}

impl FrameEvents {
    pub fn push(&mut self, event: ViewerEvent) {
        self.queue.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queues a resize notification when the container size changed since the
    /// last frame.
    pub fn observe_container(&mut self, size: egui::Vec2) {
        let size = (size.x.max(0.0).floor() as u32, size.y.max(0.0).floor() as u32);
        if self.container == Some(size) {
            return;
        }

        self.container = Some(size);
        self.push(ViewerEvent::ContainerResized {
            width: size.0,
            height: size.1,
        });
    }
}

impl EventSource for FrameEvents {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        self.queue.pop_front()
    }
}
