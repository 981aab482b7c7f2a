use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::BackgroundColor;

/// Configuration d'un export HTML.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gp_core::config::ExportConfig;
/// let config = ExportConfig::default();
/// assert!(config.colored);
/// assert!(!config.report);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Couleur inline par caractère (sinon glyphe seul).
    pub colored: bool,
    /// Fond du document. L'alpha n'est pas rendu.
    pub background: BackgroundColor,
    /// Dossier de destination. Doit exister.
    pub output_dir: PathBuf,
    /// Afficher `Saved <chemin>` après l'écriture.
    pub report: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            colored: true,
            background: BackgroundColor::default(),
            output_dir: PathBuf::from("."),
            report: false,
        }
    }
}

/// TOML file layout, all sections optional.
#[derive(Deserialize)]
struct ConfigFile {
    export: Option<ExportSection>,
}

/// Export section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct ExportSection {
    colored: Option<bool>,
    background: Option<BackgroundColor>,
    output_dir: Option<PathBuf>,
    report: Option<bool>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML or a value has the
/// wrong type (e.g. a background component above 255).
///
/// # Example
/// ```
/// use gp_core::config::parse_config;
/// let config = parse_config("[export]\ncolored = false\n").unwrap();
/// assert!(!config.colored);
/// ```
pub fn parse_config(content: &str) -> Result<ExportConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ExportConfig::default();

    if let Some(e) = file.export {
        if let Some(v) = e.colored {
            config.colored = v;
        }
        if let Some(v) = e.background {
            config.background = v;
        }
        if let Some(v) = e.output_dir {
            config.output_dir = v;
        }
        if let Some(v) = e.report {
            config.report = v;
        }
    }

    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gp_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ExportConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
