use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largeur par défaut de la grille, en caractères.
pub const DEFAULT_WIDTH: u32 = 80;
/// Hauteur par défaut en mode `stretch`.
pub const DEFAULT_STRETCH_HEIGHT: u32 = 40;
/// Délai inter-frames par défaut (ms), utilisé quand le GIF n'en déclare pas.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

/// Configuration complète d'une conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
/// Immuable pendant toute la durée d'une conversion.
///
/// # Example
/// ```
/// use ba_core::config::{ConvertConfig, ScaleMode};
/// let config = ConvertConfig::default();
/// assert_eq!(config.ramp, "default");
/// assert_eq!(config.scale_mode, ScaleMode::Maintain);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConvertConfig {
    // === Grille ===
    /// Largeur demandée en caractères. 0 = non définie.
    pub width: u32,
    /// Hauteur demandée en caractères. 0 = non définie.
    pub height: u32,
    /// Politique de dimensionnement.
    pub scale_mode: ScaleMode,
    /// Nom de la rampe de glyphes dans le registre.
    pub ramp: String,

    // === Ton ===
    /// Contraste >= 0.0. 1.0 = neutre.
    pub contrast: f64,
    /// Offset de luminosité signé, non borné, ajouté à chaque canal. 0.0 = neutre.
    pub brightness: f64,
    /// Inverser la luminance.
    pub invert: bool,
    /// Seuil de binarisation. 0 = désactivé.
    pub threshold: u8,

    // === Lecture GIF ===
    /// Rejouer l'animation.
    pub loop_gif: bool,
    /// Nombre de passes quand `loop_gif`. <= 0 = infini.
    pub loop_count: i64,
    /// Délai de repli entre frames (ms).
    pub frame_delay_ms: u64,
    /// Effacer l'écran et respecter les délais entre frames.
    pub interactive: bool,

    // === Présentation ===
    pub brainrot: BrainrotLevel,
    pub silent: bool,
    pub show_progress: bool,
    pub benchmark: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: 0,
            scale_mode: ScaleMode::Maintain,
            ramp: "default".to_string(),
            contrast: 1.0,
            brightness: 0.0,
            invert: false,
            threshold: 0,
            loop_gif: false,
            loop_count: 1,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            interactive: false,
            brainrot: BrainrotLevel::Medium,
            silent: false,
            show_progress: false,
            benchmark: false,
        }
    }
}

impl ConvertConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and CLI overrides.
    pub fn clamp_all(&mut self) {
        if !self.contrast.is_finite() {
            self.contrast = 1.0;
        }
        if !self.brightness.is_finite() {
            self.brightness = 0.0;
        }
        self.contrast = self.contrast.max(0.0);
    }

    #[must_use]
    pub fn tone(&self) -> ToneParams {
        ToneParams {
            contrast: self.contrast,
            brightness: self.brightness,
            invert: self.invert,
            threshold: self.threshold,
        }
    }

    #[must_use]
    pub fn size_hints(&self) -> SizeHints {
        SizeHints {
            width: self.width,
            height: self.height,
            scale_mode: self.scale_mode,
        }
    }

    /// Politique de répétition dérivée de `loop_gif` / `loop_count`.
    ///
    /// # Example
    /// ```
    /// use ba_core::config::{ConvertConfig, LoopPolicy};
    /// let mut config = ConvertConfig::default();
    /// assert_eq!(config.loop_policy(), LoopPolicy::Once);
    /// config.loop_gif = true;
    /// config.loop_count = 0;
    /// assert_eq!(config.loop_policy(), LoopPolicy::Forever);
    /// ```
    #[must_use]
    pub fn loop_policy(&self) -> LoopPolicy {
        if !self.loop_gif {
            return LoopPolicy::Once;
        }
        if self.loop_count <= 0 {
            return LoopPolicy::Forever;
        }
        match u32::try_from(self.loop_count).unwrap_or(u32::MAX) {
            1 => LoopPolicy::Once,
            n => LoopPolicy::Times(n),
        }
    }

    /// Flavor text is printed only when not silent and not `off`.
    #[must_use]
    pub fn flavor_enabled(&self) -> bool {
        !self.silent && self.brainrot != BrainrotLevel::Off
    }
}

/// Paramètres de ton appliqués à chaque pixel.
///
/// # Example
/// ```
/// use ba_core::config::ToneParams;
/// let tone = ToneParams::default();
/// assert_eq!(tone.contrast, 1.0);
/// assert_eq!(tone.threshold, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneParams {
    pub contrast: f64,
    pub brightness: f64,
    pub invert: bool,
    /// 0 = désactivé.
    pub threshold: u8,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 0.0,
            invert: false,
            threshold: 0,
        }
    }
}

/// Raw size parameters from which the grid dimensions are derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeHints {
    /// 0 = unset.
    pub width: u32,
    /// 0 = unset.
    pub height: u32,
    pub scale_mode: ScaleMode,
}

/// Scale mode enumeration.
///
/// # Example
/// ```
/// use ba_core::config::ScaleMode;
/// assert_eq!("fit".parse::<ScaleMode>().unwrap(), ScaleMode::Fit);
/// assert!("zoom".parse::<ScaleMode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Largeur configurée, hauteur dérivée du ratio source.
    #[default]
    Maintain,
    /// Dimensions configurées telles quelles si les deux sont données.
    Fit,
    /// Dimensions configurées, ratio source ignoré.
    Stretch,
}

impl FromStr for ScaleMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintain" => Ok(Self::Maintain),
            "fit" => Ok(Self::Fit),
            "stretch" => Ok(Self::Stretch),
            other => Err(CoreError::Config(format!(
                "mode d'échelle inconnu '{other}' (maintain, fit, stretch)"
            ))),
        }
    }
}

/// Intensité du texte décoratif.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum BrainrotLevel {
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "mild")]
    Mild,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "maximum")]
    Maximum,
    #[serde(rename = "GIGACHAD")]
    Gigachad,
}

impl BrainrotLevel {
    pub const NAMES: &'static [&'static str] = &["off", "mild", "medium", "maximum", "GIGACHAD"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Maximum => "maximum",
            Self::Gigachad => "GIGACHAD",
        }
    }
}

impl fmt::Display for BrainrotLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrainrotLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "mild" => Ok(Self::Mild),
            "medium" => Ok(Self::Medium),
            "maximum" => Ok(Self::Maximum),
            "GIGACHAD" => Ok(Self::Gigachad),
            other => Err(CoreError::Config(format!(
                "niveau brainrot invalide '{other}' ({})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Nombre de passes sur la séquence de frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPolicy {
    Once,
    Times(u32),
    /// Jusqu'à interruption externe du processus.
    Forever,
}

impl LoopPolicy {
    /// Whether pass number `completed` (0-based count of finished passes)
    /// should be followed by another one.
    #[must_use]
    pub fn wants_pass(self, completed: u32) -> bool {
        match self {
            Self::Once => completed < 1,
            Self::Times(n) => completed < n,
            Self::Forever => true,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
    playback: Option<PlaybackSection>,
    presentation: Option<PresentationSection>,
}

#[derive(Deserialize)]
struct ConvertSection {
    width: Option<u32>,
    height: Option<u32>,
    scale_mode: Option<ScaleMode>,
    ramp: Option<String>,
    contrast: Option<f64>,
    brightness: Option<f64>,
    invert: Option<bool>,
    threshold: Option<u8>,
}

#[derive(Deserialize)]
struct PlaybackSection {
    loop_gif: Option<bool>,
    loop_count: Option<i64>,
    frame_delay_ms: Option<u64>,
    interactive: Option<bool>,
}

#[derive(Deserialize)]
struct PresentationSection {
    brainrot: Option<BrainrotLevel>,
    silent: Option<bool>,
    show_progress: Option<bool>,
    benchmark: Option<bool>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use ba_core::config::parse_config;
/// let config = parse_config("[convert]\nwidth = 120\n").unwrap();
/// assert_eq!(config.width, 120);
/// assert_eq!(config.ramp, "default");
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = ConvertConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.width {
            config.width = v;
        }
        if let Some(v) = c.height {
            config.height = v;
        }
        if let Some(v) = c.scale_mode {
            config.scale_mode = v;
        }
        if let Some(v) = c.ramp {
            config.ramp = v;
        }
        if let Some(v) = c.contrast {
            config.contrast = v;
        }
        if let Some(v) = c.brightness {
            config.brightness = v;
        }
        if let Some(v) = c.invert {
            config.invert = v;
        }
        if let Some(v) = c.threshold {
            config.threshold = v;
        }
    }

    if let Some(p) = file.playback {
        if let Some(v) = p.loop_gif {
            config.loop_gif = v;
        }
        if let Some(v) = p.loop_count {
            config.loop_count = v;
        }
        if let Some(v) = p.frame_delay_ms {
            config.frame_delay_ms = v;
        }
        if let Some(v) = p.interactive {
            config.interactive = v;
        }
    }

    if let Some(p) = file.presentation {
        if let Some(v) = p.brainrot {
            config.brainrot = v;
        }
        if let Some(v) = p.silent {
            config.silent = v;
        }
        if let Some(v) = p.show_progress {
            config.show_progress = v;
        }
        if let Some(v) = p.benchmark {
            config.benchmark = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ba_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("brainrot.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    log::debug!("Configuration chargée depuis {}", path.display());
    parse_config(&content).with_context(|| format!("Fichier de configuration {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_sections_keep_defaults() {
        let config = parse_config(
            "[convert]\nramp = \"blocks\"\nthreshold = 128\n\n[presentation]\nbrainrot = \"GIGACHAD\"\n",
        )
        .unwrap();
        assert_eq!(config.ramp, "blocks");
        assert_eq!(config.threshold, 128);
        assert_eq!(config.brainrot, BrainrotLevel::Gigachad);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!((config.contrast - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), ConvertConfig::default());
    }

    #[test]
    fn scale_mode_is_lowercase_in_toml() {
        let config = parse_config("[convert]\nscale_mode = \"stretch\"\n").unwrap();
        assert_eq!(config.scale_mode, ScaleMode::Stretch);
        assert!(parse_config("[convert]\nscale_mode = \"Stretch\"\n").is_err());
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        assert!(parse_config("[convert]\nthreshold = 300\n").is_err());
    }

    #[test]
    fn negative_contrast_is_clamped() {
        let config = parse_config("[convert]\ncontrast = -2.0\nbrightness = 900.0\n").unwrap();
        assert!(config.contrast.abs() < f64::EPSILON);
        // Offset libre : seul le canal ajusté est borné.
        assert!((config.brightness - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_tone_resets_to_neutral() {
        let mut config = ConvertConfig {
            contrast: f64::NAN,
            brightness: f64::NEG_INFINITY,
            ..ConvertConfig::default()
        };
        config.clamp_all();
        assert!((config.contrast - 1.0).abs() < f64::EPSILON);
        assert!(config.brightness.abs() < f64::EPSILON);
    }

    #[test]
    fn loop_policy_from_count() {
        let mut config = ConvertConfig {
            loop_gif: true,
            ..ConvertConfig::default()
        };
        config.loop_count = 3;
        assert_eq!(config.loop_policy(), LoopPolicy::Times(3));
        config.loop_count = 1;
        assert_eq!(config.loop_policy(), LoopPolicy::Once);
        config.loop_count = -5;
        assert_eq!(config.loop_policy(), LoopPolicy::Forever);
        config.loop_gif = false;
        assert_eq!(config.loop_policy(), LoopPolicy::Once);
    }

    #[test]
    fn loop_policy_pass_counting() {
        assert!(LoopPolicy::Once.wants_pass(0));
        assert!(!LoopPolicy::Once.wants_pass(1));
        assert!(LoopPolicy::Times(2).wants_pass(1));
        assert!(!LoopPolicy::Times(2).wants_pass(2));
        assert!(LoopPolicy::Forever.wants_pass(u32::MAX));
    }

    #[test]
    fn brainrot_level_round_trips_names() {
        for name in BrainrotLevel::NAMES {
            let level: BrainrotLevel = name.parse().unwrap();
            assert_eq!(level.as_str(), *name);
        }
        assert!("gigachad".parse::<BrainrotLevel>().is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[playback]\nloop_gif = true\nloop_count = 0").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.loop_policy(), LoopPolicy::Forever);
    }

    #[test]
    fn load_config_missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/brainrot.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/brainrot.toml"));
    }
}
