use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use ba_core::error::CoreError;
use ba_core::frame::{Frame, FrameBuffer};
use ba_core::traits::Source;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ColorType, DynamicImage, ImageDecoder};

/// Formats d'entrée acceptés, reconnus par extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    ///
    /// # Errors
    /// Returns [`CoreError::UnsupportedFormat`] for any other extension.
    ///
    /// # Example
    /// ```
    /// use ba_source::image::SourceFormat;
    /// use std::path::Path;
    /// assert_eq!(SourceFormat::from_path(Path::new("cat.JPG")).unwrap(), SourceFormat::Jpeg);
    /// assert!(SourceFormat::from_path(Path::new("cat.webp")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "gif" => Ok(Self::Gif),
            _ => Err(CoreError::UnsupportedFormat {
                format: if ext.is_empty() {
                    "(aucune extension)".to_string()
                } else {
                    format!(".{ext}")
                },
            }),
        }
    }
}

/// Convert a decoded image to an 8-bit RGBA buffer.
///
/// 16-bit channels are reduced by right shift (`>> 8`), not by rounding.
#[must_use]
pub fn frame_from_dynamic(img: &DynamicImage) -> FrameBuffer {
    let (width, height) = (img.width(), img.height());
    let data = match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => img
            .to_rgba16()
            .into_raw()
            .into_iter()
            .map(|c| (c >> 8) as u8)
            .collect(),
        _ => img.to_rgba8().into_raw(),
    };
    FrameBuffer {
        data,
        width,
        height,
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Source d'image statique. Une seule frame, sans délai.
///
/// # Example
/// ```no_run
/// use ba_source::image::ImageSource;
/// use std::path::Path;
/// let source = ImageSource::new(Path::new("test.png")).unwrap();
/// ```
pub struct ImageSource {
    frames: Vec<Frame>,
}

impl ImageSource {
    /// Load an image from disk and create a source.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be decoded.
    pub fn new(path: &Path) -> Result<Self> {
        ensure_exists(path)?;
        let img = image::open(path)
            .with_context(|| format!("Impossible de décoder {}", path.display()))?;
        log::debug!(
            "Image chargée : {}×{} ({:?})",
            img.width(),
            img.height(),
            img.color()
        );
        Ok(Self::from_image(&img))
    }

    #[must_use]
    pub fn from_image(img: &DynamicImage) -> Self {
        Self {
            frames: vec![Frame::still(frame_from_dynamic(img))],
        }
    }
}

impl Source for ImageSource {
    fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn native_size(&self) -> (u32, u32) {
        let fb = &self.frames[0].buffer;
        (fb.width, fb.height)
    }

    fn is_animated(&self) -> bool {
        false
    }
}

/// Source GIF animée. Toutes les frames sont composées sur le canevas logique.
pub struct GifSource {
    frames: Vec<Frame>,
    size: (u32, u32),
}

impl GifSource {
    /// Decode every frame of an animated GIF.
    ///
    /// # Errors
    /// Returns an error if the file is missing, malformed, or has no frame.
    pub fn new(path: &Path) -> Result<Self> {
        ensure_exists(path)?;
        let file = File::open(path)
            .with_context(|| format!("Impossible d'ouvrir le GIF {}", path.display()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .with_context(|| format!("Impossible de décoder le GIF {}", path.display()))?;
        let size = decoder.dimensions();

        let frames = decoder
            .into_frames()
            .collect_frames()
            .with_context(|| format!("Frames GIF illisibles dans {}", path.display()))?;
        if frames.is_empty() {
            anyhow::bail!("Le GIF {} ne contient aucune frame", path.display());
        }

        let frames: Vec<Frame> = frames
            .into_iter()
            .map(|f| {
                let (numer, denom) = f.delay().numer_denom_ms();
                let delay = numer / denom.max(1);
                let img = DynamicImage::ImageRgba8(f.into_buffer());
                Frame {
                    buffer: frame_from_dynamic(&img),
                    delay_ms: (delay > 0).then_some(delay),
                }
            })
            .collect();

        log::debug!(
            "GIF chargé : {} frames, {}×{}",
            frames.len(),
            size.0,
            size.1
        );
        Ok(Self { frames, size })
    }
}

impl Source for GifSource {
    fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn native_size(&self) -> (u32, u32) {
        self.size
    }

    fn is_animated(&self) -> bool {
        true
    }
}

/// Open `path` as the right kind of source for its extension.
///
/// # Errors
/// Returns a [`CoreError`] for missing files or unsupported extensions,
/// or a decode error with its underlying cause.
pub fn open_source(path: &Path) -> Result<Box<dyn Source>> {
    ensure_exists(path)?;
    let format = SourceFormat::from_path(path)?;
    log::debug!("Décodage {format:?} : {}", path.display());
    Ok(match format {
        SourceFormat::Gif => Box::new(GifSource::new(path)?),
        SourceFormat::Png | SourceFormat::Jpeg | SourceFormat::Bmp => {
            Box::new(ImageSource::new(path)?)
        }
    })
}
