//! Configuration for the focus list.

/// Smooth-scroll speed is this many milliseconds per inch of travel,
/// normalized by the display density.
pub const DEFAULT_MILLISECONDS_PER_INCH: f32 = 100.0;

/// Baseline display density (mdpi).
pub const DEFAULT_DENSITY_DPI: f32 = 160.0;

/// How long a tapped central item stays pressed.
pub const DEFAULT_PRESS_RELEASE_DELAY_MILLIS: u64 = 200;

/// Tunables for [`FocusLayoutManager`](super::FocusLayoutManager).
#[derive(Clone, Debug, PartialEq)]
pub struct FocusListConfig {
    /// Scroll speed of the default smooth scroller.
    pub milliseconds_per_inch: f32,

    /// Density of the display the list is shown on.
    pub density_dpi: f32,

    /// Snap the central item to the center whenever scrolling comes to rest.
    pub snap_on_idle: bool,

    /// Delay before a tapped item's pressed state is released.
    pub press_release_delay_millis: u64,
}

impl Default for FocusListConfig {
    fn default() -> Self {
        Self {
            milliseconds_per_inch: DEFAULT_MILLISECONDS_PER_INCH,
            density_dpi: DEFAULT_DENSITY_DPI,
            snap_on_idle: true,
            press_release_delay_millis: DEFAULT_PRESS_RELEASE_DELAY_MILLIS,
        }
    }
}

impl FocusListConfig {
    /// Milliseconds it takes the default smooth scroller to travel one pixel.
    pub fn milliseconds_per_pixel(&self) -> f32 {
        if self.density_dpi <= 0.0 {
            log::warn!(
                "FocusList: non-positive density {} - falling back to {}",
                self.density_dpi,
                DEFAULT_DENSITY_DPI
            );
            return self.milliseconds_per_inch / DEFAULT_DENSITY_DPI;
        }
        self.milliseconds_per_inch / self.density_dpi
    }
}
