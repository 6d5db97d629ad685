//! Zoom sizing state machine.
//!
//! Tracks the natural size of the current image, the size of the container it
//! is shown in and the current zoom percentage, and computes the pixel size the
//! image should be displayed at for each display mode.

/// Smallest zoom percentage reachable with zoom out.
pub const MIN_ZOOM: f64 = 10.0;

/// Largest zoom percentage reachable with zoom in.
pub const MAX_ZOOM: f64 = 200.0;

/// Zoom percentage of the original size mode (100% = natural size).
pub const DEFAULT_ZOOM: f64 = 100.0;

/// Percentage added or removed by one zoom step.
pub const ZOOM_STEP: f64 = 10.0;

/// Subtracted from the fit ratio so rounding never produces scrollbars.
pub const FIT_MARGIN: f64 = 0.01;

/// Integer pixel dimensions of an image or container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Size the image element should be drawn at, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    fn scaled(natural: Dimensions, factor: f64) -> Self {
        Self::new(
            f64::from(natural.width) * factor,
            f64::from(natural.height) * factor,
        )
    }
}

/// How the current display size was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Largest size that fits the container; follows container resizes.
    #[default]
    FitToWindow,
    /// Natural size, 100%.
    OriginalSize,
    /// Set by stepping the zoom in or out.
    Manual,
}

/// Zoom range and step used by a [`ZoomController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ZoomLimits {
    /// Clamps a zoom percentage into `[min, max]`.
    pub fn clamp(&self, percent: f64) -> f64 {
        percent.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

/// Computes display sizes for fit-to-window, original size and stepped zoom.
///
/// Every operation returns the new [`DisplaySize`] when the displayed element
/// has to be resized, or `None` when nothing changed (typically because no
/// image has been loaded yet).
#[derive(Debug, Clone)]
pub struct ZoomController {
    limits: ZoomLimits,
    fit_margin: f64,
    image: Option<Dimensions>,
    container: Dimensions,
    zoom: f64,
    mode: ZoomMode,
    display: Option<DisplaySize>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), FIT_MARGIN)
    }
}

impl ZoomController {
    pub fn new(limits: ZoomLimits, fit_margin: f64) -> Self {
        Self {
            limits,
            fit_margin,
            image: None,
            container: Dimensions::default(),
            zoom: limits.clamp(DEFAULT_ZOOM),
            mode: ZoomMode::FitToWindow,
            display: None,
        }
    }

    /// Current zoom percentage.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Natural size of the current image, if one is loaded.
    pub fn image(&self) -> Option<Dimensions> {
        self.image
    }

    pub fn container(&self) -> Dimensions {
        self.container
    }

    /// Size most recently computed for the displayed element.
    pub fn display_size(&self) -> Option<DisplaySize> {
        self.display
    }

    /// Percentage of the natural width the image is currently drawn at.
    pub fn display_percent(&self) -> Option<f64> {
        let natural = self.image?;
        let display = self.display?;
        Some(display.width / f64::from(natural.width) * DEFAULT_ZOOM)
    }

    /// Records the natural size of a freshly loaded image and fits it to the
    /// container.
    ///
    /// An image with a zero side cannot be scaled; it is rejected and the
    /// controller behaves as if no image was loaded.
    pub fn set_image(&mut self, width: u32, height: u32) -> Option<DisplaySize> {
        let natural = Dimensions::new(width, height);
        if natural.is_empty() {
            log::warn!("Ignoring image with degenerate natural size {width}x{height}");
            self.clear_image();
            return None;
        }

        self.image = Some(natural);
        self.fit_to_window()
    }

    /// Forgets the current image. Sizing operations are no-ops until the next
    /// [`set_image`](Self::set_image).
    pub fn clear_image(&mut self) {
        self.image = None;
        self.display = None;
        self.mode = ZoomMode::FitToWindow;
    }

    /// Records a new container size. Only refits when in fit-to-window mode.
    pub fn set_container_size(&mut self, width: u32, height: u32) -> Option<DisplaySize> {
        self.container = Dimensions::new(width, height);
        match self.mode {
            ZoomMode::FitToWindow => self.fit_to_window(),
            ZoomMode::OriginalSize | ZoomMode::Manual => None,
        }
    }

    /// Scales the image to the largest size that fits inside the container.
    ///
    /// The recorded zoom level is clamped into the configured range while the
    /// image is drawn at the real fit scale, so [`zoom`](Self::zoom) can differ
    /// from the drawn size; [`display_percent`](Self::display_percent) reports
    /// the latter.
    pub fn fit_to_window(&mut self) -> Option<DisplaySize> {
        let natural = self.image?;
        let scale = self.fit_scale(natural);

        let size = DisplaySize::new(
            (f64::from(natural.width) * scale).floor(),
            (f64::from(natural.height) * scale).floor(),
        );
        self.zoom = self.limits.clamp(DEFAULT_ZOOM * scale);
        self.mode = ZoomMode::FitToWindow;

        log::debug!(
            "Fit {}x{} into {}x{}: scale {scale:.4}, zoom {:.1}%",
            natural.width,
            natural.height,
            self.container.width,
            self.container.height,
            self.zoom
        );
        self.show(size)
    }

    /// Displays the image at its natural size.
    pub fn original_size(&mut self) -> Option<DisplaySize> {
        let natural = self.image?;
        self.zoom = self.limits.clamp(DEFAULT_ZOOM);
        self.mode = ZoomMode::OriginalSize;
        self.show(DisplaySize::new(
            f64::from(natural.width),
            f64::from(natural.height),
        ))
    }

    /// Increases the zoom by one step, up to the maximum.
    pub fn zoom_in(&mut self) -> Option<DisplaySize> {
        self.step_zoom(self.limits.step)
    }

    /// Decreases the zoom by one step, down to the minimum.
    pub fn zoom_out(&mut self) -> Option<DisplaySize> {
        self.step_zoom(-self.limits.step)
    }

    fn step_zoom(&mut self, delta: f64) -> Option<DisplaySize> {
        let natural = self.image?;
        self.zoom = self.limits.clamp(self.zoom + delta);
        self.mode = ZoomMode::Manual;
        log::debug!("Zoom {:.1}%", self.zoom);
        self.show(DisplaySize::scaled(natural, self.zoom / DEFAULT_ZOOM))
    }

    fn fit_scale(&self, natural: Dimensions) -> f64 {
        let width_ratio = f64::from(self.container.width) / f64::from(natural.width);
        let height_ratio = f64::from(self.container.height) / f64::from(natural.height);
        width_ratio.min(height_ratio) - self.fit_margin
    }

    fn show(&mut self, size: DisplaySize) -> Option<DisplaySize> {
        self.display = Some(size);
        Some(size)
    }
}
