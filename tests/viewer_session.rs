//! Drives a viewer through a full session the way a host would: events
//! queued by the UI, drained once per frame.

use photo_viewer::{
    DisplaySize, EventSource, PhotoViewer, RenderSurface, ViewerConfig, ViewerEvent, ZoomMode,
};
use std::collections::VecDeque;

#[derive(Default)]
struct Element {
    src: Option<String>,
    width: f64,
    height: f64,
    toolbar: bool,
}

impl RenderSurface for Element {
    fn show_image(&mut self, source: &str) {
        self.src = Some(source.to_owned());
    }

    fn set_display_size(&mut self, size: DisplaySize) {
        self.width = size.width;
        self.height = size.height;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.toolbar = visible;
    }
}

/// Host-side queue that only hands out events once per "frame".
#[derive(Default)]
struct Frames {
    frames: VecDeque<Vec<ViewerEvent>>,
    current: VecDeque<ViewerEvent>,
}

impl Frames {
    fn frame(&mut self, events: Vec<ViewerEvent>) {
        self.frames.push_back(events);
    }

    fn advance(&mut self) -> bool {
        match self.frames.pop_front() {
            Some(events) => {
                self.current = events.into();
                true
            }
            None => false,
        }
    }
}

impl EventSource for Frames {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        self.current.pop_front()
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_session_from_startup_to_resize() {
    let mut viewer = PhotoViewer::new(&ViewerConfig::default(), Element::default());
    let mut frames = Frames::default();

    frames.frame(vec![
        ViewerEvent::ContainerResized {
            width: 400,
            height: 300,
        },
        ViewerEvent::ImageUrl("bytes://default-photo.svg".into()),
    ]);
    frames.frame(vec![ViewerEvent::ImageLoaded {
        source: "bytes://default-photo.svg".into(),
        width: 800,
        height: 600,
    }]);

    assert!(frames.advance());
    viewer.pump(&mut frames);
    assert_eq!(viewer.surface().src.as_deref(), Some("bytes://default-photo.svg"));
    assert!(viewer.surface().toolbar);
    assert!(!viewer.is_loaded());

    assert!(frames.advance());
    viewer.pump(&mut frames);
    assert_eq!(viewer.surface().width, 392.0);
    assert_eq!(viewer.surface().height, 294.0);
    assert!(close(viewer.zoom().zoom(), 49.0));

    // Window grows while fitted: the image follows
    frames.frame(vec![ViewerEvent::ContainerResized {
        width: 1000,
        height: 1000,
    }]);
    assert!(frames.advance());
    viewer.pump(&mut frames);
    assert_eq!(viewer.surface().width, 992.0);
    assert_eq!(viewer.surface().height, 744.0);
    assert!(!frames.advance());
}

#[test]
fn test_wheel_scrolling_session_respects_limits() {
    let mut viewer = PhotoViewer::new(&ViewerConfig::default(), Element::default());
    let mut events = VecDeque::from([
        ViewerEvent::ContainerResized {
            width: 640,
            height: 480,
        },
        ViewerEvent::ImageUrl("file:///tmp/photo.png".into()),
        ViewerEvent::ImageLoaded {
            source: "file:///tmp/photo.png".into(),
            width: 320,
            height: 240,
        },
        ViewerEvent::OriginalSize,
    ]);
    events.extend((0..30).map(|_| ViewerEvent::Wheel { delta: 1.0 }));
    viewer.pump(&mut events);

    assert_eq!(viewer.zoom().zoom(), 200.0);
    assert_eq!(viewer.zoom().mode(), ZoomMode::Manual);
    assert_eq!(viewer.surface().width, 640.0);
    assert_eq!(viewer.surface().height, 480.0);

    events.extend((0..30).map(|_| ViewerEvent::Wheel { delta: -3.0 }));
    viewer.pump(&mut events);

    assert_eq!(viewer.zoom().zoom(), 10.0);
    assert!(close(viewer.surface().width, 32.0));
    assert!(close(viewer.surface().height, 24.0));

    // Manual zoom survives a resize until fit is requested again
    events.push_back(ViewerEvent::ContainerResized {
        width: 100,
        height: 100,
    });
    viewer.pump(&mut events);
    assert!(close(viewer.surface().width, 32.0));

    events.push_back(ViewerEvent::FitToWindow);
    viewer.pump(&mut events);
    assert_eq!(viewer.surface().width, 96.0);
    assert_eq!(viewer.surface().height, 72.0);
}

#[test]
fn test_config_driven_session() {
    let config = ViewerConfig::from_ron("(max_zoom: 150.0, zoom_step: 50.0)").unwrap();
    let mut viewer = PhotoViewer::new(&config, Element::default());

    viewer.handle(ViewerEvent::ImageUrl("file:///tmp/a.png".into()));
    viewer.handle(ViewerEvent::ImageLoaded {
        source: "file:///tmp/a.png".into(),
        width: 200,
        height: 100,
    });
    viewer.handle(ViewerEvent::OriginalSize);
    viewer.handle(ViewerEvent::ZoomIn);
    viewer.handle(ViewerEvent::ZoomIn);

    assert_eq!(viewer.zoom().zoom(), 150.0);
    assert_eq!(viewer.surface().width, 300.0);
    assert_eq!(viewer.surface().height, 150.0);
}
