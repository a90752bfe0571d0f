use crate::error::CoreError;

/// 10 caractères, dense→clair, rampe par défaut.
pub const RAMP_DEFAULT: &str = "@%#*+=-:. ";

/// Blocs Unicode à largeur décroissante.
pub const RAMP_BLOCKS: &str = "█▉▊▋▌▍▎▏ ";

/// Motifs braille, du plus plein au plus vide.
pub const RAMP_DOTS: &str = "⣿⣾⣽⣻⢿⡿⣟⣯⣷⣶⣴⣤⣠⣀ ";

/// 70 caractères, Paul Bourke, résolution maximale (dense→clair).
pub const RAMP_CLASSIC: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Minimal, haut contraste.
pub const RAMP_MINIMAL: &str = "█░ ";

/// Named ramps, in display order. Populated at compile time, never mutated.
static RAMPS: &[(&str, &str)] = &[
    ("default", RAMP_DEFAULT),
    ("blocks", RAMP_BLOCKS),
    ("dots", RAMP_DOTS),
    ("classic", RAMP_CLASSIC),
    ("simple", "##++--.. "),
    ("minimal", RAMP_MINIMAL),
    ("retro", "▓▒░ "),
    ("sigma", "σΣαβγδ "),
    ("ohio", "OHIO "),
    ("rizz", "RIZZ "),
    ("gyatt", "GYATT "),
    ("skibidi", "SKIBIDI "),
    ("cringe", "💀😭🔥💯 "),
    ("based", "BASED "),
    ("sussy", "ඞ๖♡◄►▲▼ "),
];

/// Iterate over `(name, glyphs)` for every registered ramp.
pub fn registry() -> impl Iterator<Item = (&'static str, &'static str)> {
    RAMPS.iter().copied()
}

/// Look up the glyphs of a named ramp.
///
/// # Example
/// ```
/// use ba_core::charset::lookup;
/// assert_eq!(lookup("default"), Some("@%#*+=-:. "));
/// assert_eq!(lookup("nope"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    RAMPS.iter().find(|(n, _)| *n == name).map(|(_, g)| *g)
}

/// Ordered, non-empty sequence of glyphs used as quantization buckets.
///
/// Index 0 is conventionally the darkest/densest glyph.
///
/// # Example
/// ```
/// use ba_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::from_name("default").unwrap();
/// assert_eq!(ramp.glyph_for(0), '@');
/// assert_eq!(ramp.glyph_for(255), ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

#[allow(clippy::len_without_is_empty)] // jamais vide par construction
impl GlyphRamp {
    /// Build a ramp from an arbitrary glyph string.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(CoreError::Config(
                "une rampe de glyphes doit contenir au moins un caractère".into(),
            ));
        }
        Ok(Self { glyphs })
    }

    /// Resolve a ramp from the registry.
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownRamp`] if the name is not registered.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let glyphs = lookup(name).ok_or_else(|| CoreError::UnknownRamp {
            name: name.to_string(),
            available: registry().map(|(n, _)| n).collect::<Vec<_>>().join(" "),
        })?;
        Self::new(glyphs)
    }

    /// Number of glyphs (Unicode scalars, not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Quantize a gray level into a ramp index in `[0, len - 1]`.
    ///
    /// # Example
    /// ```
    /// use ba_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::new("ab").unwrap();
    /// assert_eq!(ramp.index_for(0), 0);
    /// assert_eq!(ramp.index_for(254), 0);
    /// assert_eq!(ramp.index_for(255), 1);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index_for(&self, gray: u8) -> usize {
        let last = self.glyphs.len() - 1;
        (usize::from(gray) * last / 255).min(last)
    }

    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, gray: u8) -> char {
        self.glyphs[self.index_for(gray)]
    }
}

/// Lookup table mapping gray level [0..255] → glyph.
///
/// Pre-computed once per ramp for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use ba_core::charset::{GlyphRamp, LuminanceLut};
/// let lut = LuminanceLut::new(&GlyphRamp::new("@#. ").unwrap());
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(255), ' ');
/// ```
pub struct LuminanceLut {
    lut: [char; 256],
}

impl LuminanceLut {
    #[must_use]
    pub fn new(ramp: &GlyphRamp) -> Self {
        let mut lut = [' '; 256];
        for (gray, slot) in (0..=u8::MAX).zip(lut.iter_mut()) {
            *slot = ramp.glyph_for(gray);
        }
        Self { lut }
    }

    /// Map a gray level [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, gray: u8) -> char {
        self.lut[usize::from(gray)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_ramp_resolves() {
        for (name, glyphs) in registry() {
            let ramp = GlyphRamp::from_name(name).unwrap();
            assert_eq!(ramp.len(), glyphs.chars().count(), "rampe {name}");
        }
    }

    #[test]
    fn unknown_ramp_lists_available_names() {
        let err = GlyphRamp::from_name("vaporwave").unwrap_err();
        match err {
            CoreError::UnknownRamp { name, available } => {
                assert_eq!(name, "vaporwave");
                assert!(available.starts_with("default blocks dots classic"));
            }
            other => panic!("erreur inattendue : {other}"),
        }
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert!(matches!(GlyphRamp::new(""), Err(CoreError::Config(_))));
    }

    #[test]
    fn index_stays_in_bounds_for_every_length() {
        for len in 1..=80usize {
            let glyphs: String = (0..len).map(|i| char::from(b'!' + (i % 90) as u8)).collect();
            let ramp = GlyphRamp::new(&glyphs).unwrap();
            for gray in 0..=u8::MAX {
                assert!(ramp.index_for(gray) < len);
            }
            assert_eq!(ramp.index_for(0), 0);
            assert_eq!(ramp.index_for(255), len - 1);
        }
    }

    #[test]
    fn single_glyph_ramp_maps_everything_to_it() {
        let ramp = GlyphRamp::new("#").unwrap();
        let lut = LuminanceLut::new(&ramp);
        for gray in 0..=u8::MAX {
            assert_eq!(lut.map(gray), '#');
        }
    }

    #[test]
    fn multibyte_glyphs_are_indexed_by_char() {
        let ramp = GlyphRamp::from_name("cringe").unwrap();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.glyph_for(0), '💀');
        assert_eq!(ramp.glyph_for(255), ' ');
    }

    #[test]
    fn luminance_lut_monotonic() {
        let ramp = GlyphRamp::new(RAMP_DEFAULT).unwrap();
        let lut = LuminanceLut::new(&ramp);
        let mut prev_idx = 0usize;
        for gray in 0..=u8::MAX {
            let ch = lut.map(gray);
            let idx = ramp.glyphs().iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "LUT non monotone à luminance {gray}");
            prev_idx = idx;
        }
    }
}
