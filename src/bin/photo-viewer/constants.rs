/// Initial window size in pixels.
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];

/// How long error toasts stay on screen.
pub const ERROR_TOAST_SECONDS: f64 = 8.0;

/// Shortcut summary shown in the status bar.
pub const CONTROLS_HINT: &str =
    "Scroll: Zoom | +/-: Zoom | F: Fit | 0: Original size | Drop a file to open";
