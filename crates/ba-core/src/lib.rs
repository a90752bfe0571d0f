/// Configuration, types, and shared structures for brainrot-ascii.
///
/// This crate contains all shared types, traits, and configuration logic
/// used across the brainrot-ascii workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::{GlyphRamp, LuminanceLut};
pub use config::{ConvertConfig, LoopPolicy, ScaleMode, SizeHints, ToneParams};
pub use error::CoreError;
pub use frame::{AsciiGrid, Frame, FrameBuffer};
