//! Tone mapping : couleur source → intensité 8 bits.

use ba_core::config::ToneParams;

/// Poids de luminance (Rec. 601).
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Convert one pixel to an 8-bit gray level.
///
/// Each channel gets `(c - 128) * contrast + 128 + brightness`, clamped to
/// [0, 255], then the Rec. 601 weighted sum is taken, optionally inverted,
/// and truncated (never rounded).
///
/// # Example
/// ```
/// use ba_ascii::tone::tone_to_gray;
/// use ba_core::config::ToneParams;
/// let tone = ToneParams::default();
/// assert_eq!(tone_to_gray((255, 255, 255), &tone), 255);
/// assert_eq!(tone_to_gray((255, 0, 0), &tone), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn tone_to_gray((r, g, b): (u8, u8, u8), tone: &ToneParams) -> u8 {
    let r = adjust(r, tone);
    let g = adjust(g, tone);
    let b = adjust(b, tone);

    let mut gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    if tone.invert {
        gray = 255.0 - gray;
    }
    gray as u8
}

#[inline(always)]
fn adjust(channel: u8, tone: &ToneParams) -> f64 {
    let c = f64::from(channel);
    ((c - 128.0) * tone.contrast + 128.0 + tone.brightness).clamp(0.0, 255.0)
}

/// Binarize a gray level when `threshold > 0`; identity otherwise.
///
/// # Example
/// ```
/// use ba_ascii::tone::apply_threshold;
/// assert_eq!(apply_threshold(127, 128), 0);
/// assert_eq!(apply_threshold(128, 128), 255);
/// assert_eq!(apply_threshold(42, 0), 42);
/// ```
#[inline(always)]
#[must_use]
pub fn apply_threshold(gray: u8, threshold: u8) -> u8 {
    match threshold {
        0 => gray,
        t if gray < t => 0,
        _ => 255,
    }
}
