use std::path::PathBuf;

use clap::Parser;
use gp_core::color::BackgroundColor;
use gp_export::naming::SourceId;

/// glyphpage — Export HTML stylé d'une grille ASCII colorée.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grille à exporter, sérialisée en JSON par le convertisseur.
    #[arg(long)]
    pub grid: PathBuf,

    /// Image d'origine (fichier local). Sert au nommage du fichier.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Image d'origine (URL). Sert au nommage du fichier.
    #[arg(long)]
    pub url: Option<String>,

    /// Dossier de destination (doit exister).
    #[arg(long)]
    pub save_html: Option<PathBuf>,

    /// Couleur de fond "r,g,b,a". L'alpha est ignoré.
    #[arg(long)]
    pub save_bg: Option<BackgroundColor>,

    /// Forcer la couleur par caractère.
    #[arg(long, default_value_t = false, conflicts_with = "no_color")]
    pub color: bool,

    /// Désactiver la couleur.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Sauvegarder sans autre sortie que `Saved <chemin>`.
    #[arg(long, default_value_t = false)]
    pub only_save: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the source identifier used for naming.
    ///
    /// # Errors
    /// Returns an error if zero or both of `--image` and `--url` are given.
    pub fn source(&self) -> anyhow::Result<SourceId> {
        match (&self.image, &self.url) {
            (Some(path), None) => Ok(SourceId::Path(path.clone())),
            (None, Some(url)) => Ok(SourceId::Url(url.clone())),
            (None, None) => anyhow::bail!(
                "Aucune source spécifiée. Utilisez --image ou --url pour nommer l'export."
            ),
            (Some(_), Some(_)) => {
                anyhow::bail!("Une seule source à la fois. Spécifiez --image OU --url.")
            }
        }
    }

    /// Couleur demandée en ligne de commande, si précisée.
    #[must_use]
    pub fn colored_override(&self) -> Option<bool> {
        if self.no_color {
            Some(false)
        } else if self.color {
            Some(true)
        } else {
            None
        }
    }
}
