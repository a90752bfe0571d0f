use ba_core::config::{DEFAULT_STRETCH_HEIGHT, DEFAULT_WIDTH, ScaleMode, SizeHints};

/// Correction du ratio d'une cellule de police monospace (plus haute que large).
pub const CELL_ASPECT: f64 = 0.43;

/// Dimensions of the target character grid. Both are always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    #[must_use]
    pub fn cells(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Derive the grid dimensions from the size hints and the source bounds.
///
/// - `Maintain`: configured width (80 if unset), height from the source ratio.
/// - `Fit`: both hints verbatim when both are set, otherwise as `Maintain`.
/// - `Stretch`: both hints verbatim, 80×40 for unset dimensions.
///
/// Derived heights use `f64::round` (half away from zero). A zero dimension
/// is clamped to 1.
///
/// # Example
/// ```
/// use ba_ascii::dimensions::derive_grid;
/// use ba_core::config::{ScaleMode, SizeHints};
/// let hints = SizeHints { width: 80, height: 0, scale_mode: ScaleMode::Maintain };
/// let grid = derive_grid(hints, 200, 100);
/// assert_eq!((grid.width, grid.height), (80, 17));
/// ```
#[must_use]
pub fn derive_grid(hints: SizeHints, src_width: u32, src_height: u32) -> GridSpec {
    let (width, height) = match hints.scale_mode {
        ScaleMode::Fit if hints.width > 0 && hints.height > 0 => (hints.width, hints.height),
        ScaleMode::Maintain | ScaleMode::Fit => {
            let width = or_default(hints.width, DEFAULT_WIDTH);
            (width, derived_height(width, src_width, src_height))
        }
        ScaleMode::Stretch => (
            or_default(hints.width, DEFAULT_WIDTH),
            or_default(hints.height, DEFAULT_STRETCH_HEIGHT),
        ),
    };

    if width == 0 || height == 0 {
        log::debug!("Grille dégénérée {width}×{height}, ramenée à au moins 1×1");
    }
    GridSpec {
        width: width.max(1),
        height: height.max(1),
    }
}

fn or_default(value: u32, default: u32) -> u32 {
    if value == 0 { default } else { value }
}

fn derived_height(width: u32, src_width: u32, src_height: u32) -> u32 {
    if src_width == 0 {
        return 0;
    }
    let ratio = f64::from(src_height) / f64::from(src_width);
    (f64::from(width) * ratio * CELL_ASPECT).round() as u32
}
