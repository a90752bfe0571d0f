use ba_core::charset::{GlyphRamp, LuminanceLut};
use ba_core::config::{SizeHints, ToneParams};
use ba_core::frame::{AsciiGrid, FrameBuffer};

use crate::dimensions::{GridSpec, derive_grid};
use crate::tone::{apply_threshold, tone_to_gray};

/// Nearest-neighbor source coordinate for target cell `cell`.
///
/// `floor(cell * source / target)`, clamped to `source - 1`.
///
/// # Example
/// ```
/// use ba_ascii::luminance::sample_coord;
/// assert_eq!(sample_coord(0, 4, 100), 0);
/// assert_eq!(sample_coord(3, 4, 100), 75);
/// assert_eq!(sample_coord(9, 10, 3), 2);
/// ```
#[inline(always)]
#[must_use]
pub fn sample_coord(cell: u32, target: u32, source: u32) -> u32 {
    let src = u64::from(cell) * u64::from(source) / u64::from(target.max(1));
    (src as u32).min(source.saturating_sub(1))
}

/// Process a frame into an ASCII grid using luminance mapping.
///
/// For each grid cell, samples the nearest source pixel, tone-maps it,
/// applies the optional threshold and maps the gray level to a glyph via LUT.
/// `on_row` is called with the number of completed rows after each row.
///
/// # Example
/// ```
/// use ba_core::frame::{FrameBuffer, AsciiGrid};
/// use ba_core::config::ToneParams;
/// use ba_core::charset::{GlyphRamp, LuminanceLut};
/// use ba_ascii::luminance::process_luminance;
///
/// let frame = FrameBuffer::new(10, 10);
/// let mut grid = AsciiGrid::new(5, 5);
/// let lut = LuminanceLut::new(&GlyphRamp::from_name("default").unwrap());
/// process_luminance(&frame, &ToneParams::default(), &lut, &mut grid, |_| {});
/// assert!(grid.cells.iter().all(|&c| c == '@'));
/// ```
pub fn process_luminance(
    frame: &FrameBuffer,
    tone: &ToneParams,
    lut: &LuminanceLut,
    grid: &mut AsciiGrid,
    mut on_row: impl FnMut(u32),
) {
    for cy in 0..grid.height {
        let py = sample_coord(cy, grid.height, frame.height);
        for cx in 0..grid.width {
            let px = sample_coord(cx, grid.width, frame.width);

            let (r, g, b, _) = frame.pixel(px, py);
            let gray = apply_threshold(tone_to_gray((r, g, b), tone), tone.threshold);
            grid.set(cx, cy, lut.map(gray));
        }
        on_row(cy + 1);
    }
}

/// Resampler/Quantizer bound to one ramp and one set of tone parameters.
///
/// Stateless between calls: rendering the same frame twice yields
/// identical grids.
///
/// # Example
/// ```
/// use ba_ascii::luminance::Renderer;
/// use ba_ascii::dimensions::GridSpec;
/// use ba_core::charset::GlyphRamp;
/// use ba_core::config::ToneParams;
/// use ba_core::frame::FrameBuffer;
///
/// let renderer = Renderer::new(&GlyphRamp::from_name("default").unwrap(), ToneParams::default());
/// let frame = FrameBuffer::from_rgb(1, 1, &[(255, 255, 255)]);
/// let grid = renderer.render(&frame, GridSpec { width: 3, height: 1 });
/// assert_eq!(grid.to_string(), "   \n");
/// ```
pub struct Renderer {
    tone: ToneParams,
    lut: LuminanceLut,
}

impl Renderer {
    #[must_use]
    pub fn new(ramp: &GlyphRamp, tone: ToneParams) -> Self {
        Self {
            tone,
            lut: LuminanceLut::new(ramp),
        }
    }

    /// Render `frame` into a fresh grid of the given dimensions.
    #[must_use]
    pub fn render(&self, frame: &FrameBuffer, spec: GridSpec) -> AsciiGrid {
        self.render_with_progress(frame, spec, |_, _| {})
    }

    /// Like [`Renderer::render`], reporting `(cells_done, cells_total)` after each row.
    pub fn render_with_progress(
        &self,
        frame: &FrameBuffer,
        spec: GridSpec,
        mut progress: impl FnMut(u64, u64),
    ) -> AsciiGrid {
        let mut grid = AsciiGrid::new(spec.width.max(1), spec.height.max(1));
        let total = u64::from(grid.width) * u64::from(grid.height);
        let width = u64::from(grid.width);
        process_luminance(frame, &self.tone, &self.lut, &mut grid, |rows| {
            progress(u64::from(rows) * width, total);
        });
        grid
    }
}

/// One-shot conversion: derive the grid from `hints`, then render.
///
/// # Example
/// ```
/// use ba_ascii::luminance::render_frame;
/// use ba_core::charset::GlyphRamp;
/// use ba_core::config::{ScaleMode, SizeHints, ToneParams};
/// use ba_core::frame::FrameBuffer;
///
/// let frame = FrameBuffer::from_rgb(2, 2, &[(255, 255, 255), (0, 0, 0), (0, 0, 0), (255, 255, 255)]);
/// let hints = SizeHints { width: 2, height: 2, scale_mode: ScaleMode::Fit };
/// let grid = render_frame(&frame, hints, &ToneParams::default(), &GlyphRamp::from_name("default").unwrap());
/// assert_eq!(grid.to_string(), " @\n@ \n");
/// ```
#[must_use]
pub fn render_frame(
    frame: &FrameBuffer,
    hints: SizeHints,
    tone: &ToneParams,
    ramp: &GlyphRamp,
) -> AsciiGrid {
    let spec = derive_grid(hints, frame.width, frame.height);
    Renderer::new(ramp, *tone).render(frame, spec)
}
