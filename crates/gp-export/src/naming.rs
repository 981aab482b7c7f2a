use std::path::{Path, PathBuf};

use crate::error::NamingError;

/// Suffixe de l'export HTML stylé.
pub const HTML_SUFFIX: &str = "-ascii-art.html";
/// Suffixe de l'export texte brut.
pub const TEXT_SUFFIX: &str = "-ascii-art.txt";
/// Suffixe de l'export image.
pub const IMAGE_SUFFIX: &str = "-ascii-art.png";

/// Origine de l'image convertie. Sert uniquement au nommage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceId {
    /// Fichier local.
    Path(PathBuf),
    /// Image téléchargée.
    Url(String),
}

impl SourceId {
    #[must_use]
    pub fn path(p: impl Into<PathBuf>) -> Self {
        Self::Path(p.into())
    }

    #[must_use]
    pub fn url(u: impl Into<String>) -> Self {
        Self::Url(u.into())
    }
}

/// Dérive le nom du fichier de sortie : `<nom>-<ext><suffix>`.
///
/// L'extension d'origine reste dans le nom pour que `photo.png` et
/// `photo.jpg` ne s'écrasent pas. Sans extension : `<nom><suffix>`.
/// Pour une URL, le dernier segment du chemin est utilisé, sans requête ni
/// fragment.
///
/// # Errors
/// Returns a [`NamingError`] if the identifier is empty or has no usable
/// final segment.
///
/// # Example
/// ```
/// use gp_export::naming::{HTML_SUFFIX, SourceId, derive_file_name};
/// let name = derive_file_name(&SourceId::path("imgs/cat.png"), HTML_SUFFIX).unwrap();
/// assert_eq!(name, "cat-png-ascii-art.html");
/// let name = derive_file_name(&SourceId::url("https://x.org/a/dog.jpg?s=2"), HTML_SUFFIX).unwrap();
/// assert_eq!(name, "dog-jpg-ascii-art.html");
/// ```
pub fn derive_file_name(source: &SourceId, suffix: &str) -> Result<String, NamingError> {
    let base = match source {
        SourceId::Path(p) => path_base(p)?,
        SourceId::Url(u) => url_base(u)?,
    };
    Ok(format!("{base}{suffix}"))
}

fn path_base(path: &Path) -> Result<String, NamingError> {
    if path.as_os_str().is_empty() {
        return Err(NamingError::Empty);
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| NamingError::NoFileName {
            path: path.display().to_string(),
        })?;
    Ok(split_extension(&file_name))
}

fn url_base(url: &str) -> Result<String, NamingError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(NamingError::Empty);
    }
    let no_fragment = trimmed.split('#').next().unwrap_or_default();
    let no_query = no_fragment.split('?').next().unwrap_or_default();
    let after_scheme = no_query
        .split_once("://")
        .map_or(no_query, |(_, rest)| rest);
    // Le premier segment est l'hôte, jamais un nom d'image.
    let segment = after_scheme
        .split_once('/')
        .and_then(|(_, path)| path.rsplit('/').next())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .ok_or_else(|| NamingError::NoUrlSegment {
            url: url.to_string(),
        })?;
    Ok(split_extension(segment))
}

/// `cat.png` → `cat-png`, `cat` → `cat`, `.hidden` → `.hidden`.
fn split_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!("{stem}-{ext}"),
        _ => file_name.to_string(),
    }
}
