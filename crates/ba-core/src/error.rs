use thiserror::Error;

/// Errors originating from the core module.
///
/// All of them are configuration errors: they are raised before the first
/// frame is sampled, so a failing run never emits partial output.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file or data format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },

    /// Glyph ramp name absent from the registry.
    #[error("Jeu de caractères inconnu : {name} (disponibles : {available})")]
    UnknownRamp {
        /// Requested ramp name.
        name: String,
        /// Space-separated list of registered names.
        available: String,
    },
}
