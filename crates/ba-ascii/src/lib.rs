/// ASCII conversion engine for brainrot-ascii.
///
/// Converts pixel frames to glyph grids: tone mapping, grid dimension
/// derivation and nearest-neighbor resampling/quantization.
pub mod dimensions;
pub mod luminance;
pub mod tone;

pub use dimensions::{GridSpec, derive_grid};
pub use luminance::{Renderer, render_frame};
pub use tone::tone_to_gray;
