use std::path::PathBuf;

use thiserror::Error;

/// Impossible de dériver un nom de fichier depuis l'identifiant source.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    /// Identifiant vide.
    #[error("Identifiant de source vide")]
    Empty,

    /// Le chemin ne se termine pas par un nom de fichier (`/`, `..`).
    #[error("Aucun nom de fichier dans {path}")]
    NoFileName {
        /// Chemin fourni.
        path: String,
    },

    /// L'URL n'a pas de dernier segment exploitable.
    #[error("Aucun nom d'image dans l'URL {url}")]
    NoUrlSegment {
        /// URL fournie.
        url: String,
    },
}

/// Errors originating from the export module.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Name derivation failed, passed through unchanged.
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Le dossier de destination n'existe pas. Aucune écriture tentée.
    #[error("Le dossier de sauvegarde {path} n'existe pas")]
    DestinationNotFound {
        /// Chemin normalisé testé.
        path: String,
    },

    /// L'écriture a échoué.
    #[error("Échec d'écriture de {}", path.display())]
    Io {
        /// Fichier cible.
        path: PathBuf,
        /// Erreur OS d'origine.
        #[source]
        source: std::io::Error,
    },
}
