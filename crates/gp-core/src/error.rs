use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// A background color did not have exactly four components.
    #[error("Couleur de fond invalide : {value}")]
    InvalidBackground {
        /// The rejected input.
        value: String,
    },
}
