//! Image viewer core: fit-to-window, original size and stepped zoom, driven by
//! host events and drawn on a host-provided surface.

pub mod config;
pub mod event;
pub mod viewer;
pub mod zoom;

pub use config::{ConfigError, ViewerConfig};
pub use event::{EventSource, ViewerEvent};
pub use viewer::{PhotoViewer, RenderSurface};
pub use zoom::{Dimensions, DisplaySize, ZoomController, ZoomLimits, ZoomMode};
