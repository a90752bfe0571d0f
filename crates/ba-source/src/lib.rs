/// Visual source modules for brainrot-ascii (still images, animated GIF).

pub mod image;

pub use crate::image::{GifSource, ImageSource, SourceFormat, open_source};
