//! Inbound events understood by the viewer.

use std::collections::VecDeque;

/// Something that happened in the host and that the viewer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// A new image should be displayed. Empty sources are ignored.
    ImageUrl(String),
    /// The host finished loading `source` and reports its natural size.
    ImageLoaded {
        source: String,
        width: u32,
        height: u32,
    },
    /// The viewport the image is shown in changed size.
    ContainerResized { width: u32, height: u32 },
    FitToWindow,
    ZoomIn,
    ZoomOut,
    OriginalSize,
    /// Mouse wheel scroll; positive zooms in, negative zooms out.
    Wheel { delta: f32 },
}

/// Queue of pending events, drained by [`PhotoViewer::pump`](crate::PhotoViewer::pump).
pub trait EventSource {
    fn next_event(&mut self) -> Option<ViewerEvent>;
}

impl EventSource for VecDeque<ViewerEvent> {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        self.pop_front()
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        (**self).next_event()
    }
}
