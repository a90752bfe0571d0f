use std::path::PathBuf;

use anyhow::Result;
use ba_core::config::{BrainrotLevel, ConvertConfig, ScaleMode};
use clap::Parser;

/// brainrot-ascii: convert images to ASCII art with maximum brainrot energy.
#[derive(Parser, Debug)]
#[command(name = "brainrot-ascii", version, about, long_about = None)]
pub struct Cli {
    /// Image source : PNG, JPEG, BMP ou GIF.
    #[arg(required_unless_present = "list_sets")]
    pub input: Option<PathBuf>,

    /// Fichier de sortie (défaut : stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Largeur en caractères (défaut : 80).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Hauteur en caractères (défaut : auto).
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Mode d'échelle : maintain, fit, stretch.
    #[arg(short, long)]
    pub scale_mode: Option<String>,

    /// Jeu de caractères (voir --list-sets).
    #[arg(short = 'a', long)]
    pub ascii_set: Option<String>,

    /// Inverser la luminosité.
    #[arg(short, long, default_value_t = false)]
    pub invert: bool,

    /// Seuil de binarisation 0-255 (0 = désactivé).
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Contraste (1.0 = neutre).
    #[arg(short, long)]
    pub contrast: Option<f64>,

    /// Offset de luminosité, en unités 0-255.
    #[arg(short, long, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Niveau brainrot : off, mild, medium, maximum, GIGACHAD.
    #[arg(long)]
    pub brainrot: Option<String>,

    /// Aucun texte décoratif.
    #[arg(long, default_value_t = false)]
    pub silent: bool,

    /// Délai entre frames en ms quand le GIF n'en déclare pas.
    #[arg(long)]
    pub frame_delay: Option<u64>,

    /// Rejouer l'animation GIF.
    #[arg(long = "loop", default_value_t = false)]
    pub loop_gif: bool,

    /// Nombre de passes avec --loop (0 = infini).
    #[arg(long, allow_negative_numbers = true)]
    pub loop_count: Option<i64>,

    /// Lecture GIF interactive (efface l'écran, respecte les délais).
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Logs détaillés (équivaut à --log-level debug).
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Afficher une barre de progression sur stderr.
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Afficher les statistiques de conversion.
    #[arg(long, default_value_t = false)]
    pub benchmark: bool,

    /// Fichier de configuration TOML. Ignoré s'il n'existe pas.
    #[arg(long, default_value = "brainrot.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Lister les jeux de caractères disponibles.
    #[arg(long, default_value_t = false)]
    pub list_sets: bool,
}

impl Cli {
    /// Effective log filter: `--silent` wins, then `--verbose`, then `--log-level`.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        if self.silent {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
        }
    }

    /// Apply the flags that were given on top of `config`.
    ///
    /// # Errors
    /// Returns an error for an unknown scale mode or brainrot level.
    pub fn apply_overrides(&self, config: &mut ConvertConfig) -> Result<()> {
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(ref v) = self.scale_mode {
            config.scale_mode = v.parse::<ScaleMode>()?;
        }
        if let Some(ref v) = self.ascii_set {
            config.ramp.clone_from(v);
        }
        if self.invert {
            config.invert = true;
        }
        if let Some(v) = self.threshold {
            config.threshold = v;
        }
        if let Some(v) = self.contrast {
            config.contrast = v;
        }
        if let Some(v) = self.brightness {
            config.brightness = v;
        }
        if let Some(ref v) = self.brainrot {
            config.brainrot = v.parse::<BrainrotLevel>()?;
        }
        if self.silent {
            config.silent = true;
        }
        if let Some(v) = self.frame_delay {
            config.frame_delay_ms = v;
        }
        if self.loop_gif {
            config.loop_gif = true;
        }
        if let Some(v) = self.loop_count {
            config.loop_count = v;
        }
        if self.interactive {
            config.interactive = true;
        }
        if self.progress {
            config.show_progress = true;
        }
        if self.benchmark {
            config.benchmark = true;
        }
        config.clamp_all();
        Ok(())
    }
}
