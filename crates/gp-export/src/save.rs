use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf, is_separator};

use crate::error::ExportError;
use crate::naming::{HTML_SUFFIX, SourceId, derive_file_name};

/// Où et sous quel nom écrire un export.
#[derive(Clone, Debug)]
pub struct OutputTarget {
    /// Dossier de destination. N'est jamais créé.
    pub dir: PathBuf,
    /// Source de l'image, utilisée seulement pour le nommage.
    pub source: SourceId,
    /// Afficher `Saved <chemin>` sur stdout après l'écriture.
    pub report: bool,
}

impl OutputTarget {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, source: SourceId, report: bool) -> Self {
        Self {
            dir: dir.into(),
            source,
            report,
        }
    }
}

/// Ajoute un séparateur final si absent. Idempotent, purement textuel :
/// ni `.` ni `..` ne sont résolus.
///
/// # Example
/// ```
/// use gp_export::save::normalize_dir;
/// use std::path::Path;
/// let once = normalize_dir(Path::new("out"));
/// assert_eq!(normalize_dir(&once), once);
/// ```
#[must_use]
pub fn normalize_dir(dir: &Path) -> PathBuf {
    let raw = dir.as_os_str();
    if raw.to_string_lossy().ends_with(is_separator) {
        return dir.to_path_buf();
    }
    let mut s = OsString::with_capacity(raw.len() + 1);
    s.push(raw);
    s.push(MAIN_SEPARATOR_STR);
    PathBuf::from(s)
}

/// Écrit `html` dans `<dir>/<nom>-<ext>-ascii-art.html`.
///
/// Un fichier existant du même nom est écrasé sans avertissement. Rien n'est
/// écrit si le nommage échoue ou si le dossier n'existe pas. Retourne le
/// chemin complet du fichier.
///
/// # Errors
/// - [`ExportError::Naming`] if no file name can be derived from the source.
/// - [`ExportError::DestinationNotFound`] if the directory does not exist.
/// - [`ExportError::Io`] if the write fails, including when the destination
///   exists but is not a directory.
///
/// # Example
/// ```no_run
/// use gp_export::save::{OutputTarget, save_html};
/// use gp_export::naming::SourceId;
/// let target = OutputTarget::new("out", SourceId::path("cat.png"), false);
/// let path = save_html("<!DOCTYPE html>", &target).unwrap();
/// assert!(path.ends_with("cat-png-ascii-art.html"));
/// ```
pub fn save_html(html: &str, target: &OutputTarget) -> Result<PathBuf, ExportError> {
    let file_name = derive_file_name(&target.source, HTML_SUFFIX)?;

    // Un dossier vide deviendrait la racine après normalisation.
    if target.dir.as_os_str().is_empty() {
        log::warn!("Dossier de sauvegarde vide");
        return Err(ExportError::DestinationNotFound {
            path: String::new(),
        });
    }

    let dir = normalize_dir(&target.dir);
    // Seule l'absence est rejetée ici. Un fichier ordinaire ou un stat refusé
    // laisse passer, l'écriture échoue alors en `Io`.
    if let Err(e) = std::fs::metadata(&dir)
        && e.kind() == ErrorKind::NotFound
    {
        log::warn!("Dossier de sauvegarde introuvable : {}", dir.display());
        return Err(ExportError::DestinationNotFound {
            path: dir.display().to_string(),
        });
    }

    let path = dir.join(&file_name);
    write_file(&path, html.as_bytes()).map_err(|source| {
        log::warn!("Échec d'écriture de {} : {source}", path.display());
        ExportError::Io {
            path: path.clone(),
            source,
        }
    })?;
    log::debug!("{} octets écrits dans {}", html.len(), path.display());

    if let Err(e) = report_saved(&mut std::io::stdout().lock(), target.report, &path) {
        log::warn!("Impossible d'afficher le chemin sauvegardé : {e}");
    }
    Ok(path)
}

/// Écrit `Saved <chemin>` sur `out` si `report`, rien sinon.
///
/// # Errors
/// Returns the error of the underlying writer.
///
/// # Example
/// ```
/// use gp_export::save::report_saved;
/// use std::path::Path;
/// let mut out = Vec::new();
/// report_saved(&mut out, true, Path::new("out/cat-png-ascii-art.html")).unwrap();
/// assert_eq!(out, b"Saved out/cat-png-ascii-art.html\n");
/// ```
pub fn report_saved(out: &mut impl Write, report: bool, path: &Path) -> std::io::Result<()> {
    if report {
        writeln!(out, "Saved {}", path.display())?;
    }
    Ok(())
}

/// Texte, pas un script : rw pour tous, sans bit d'exécution (umask appliqué).
fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }
    let mut file = options.open(path)?;
    if let Err(e) = file.write_all(bytes).and_then(|()| file.flush()) {
        drop(file);
        remove_partial(path);
        return Err(e);
    }
    Ok(())
}

/// Pas de fichier partiel. Un échec de suppression est seulement journalisé.
fn remove_partial(path: &Path) {
    if let Err(rm) = std::fs::remove_file(path) {
        log::warn!("Fichier partiel laissé en place {} : {rm}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NamingError;

    const DOC: &str = "<!DOCTYPE html><html><body><pre><span>#</span><br></pre></body></html>";

    #[test]
    fn normalize_appends_once() {
        let sep = MAIN_SEPARATOR_STR;
        let once = normalize_dir(Path::new("out"));
        assert_eq!(once, PathBuf::from(format!("out{sep}")));
        assert_eq!(normalize_dir(&once), once);
        assert_eq!(
            normalize_dir(Path::new("a/./../b")),
            PathBuf::from(format!("a/./../b{sep}"))
        );
    }

    #[test]
    fn writes_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(dir.path(), SourceId::path("img/cat.png"), false);
        let path = save_html(DOC, &target).unwrap();
        assert_eq!(path, dir.path().join("cat-png-ascii-art.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DOC);
    }

    #[test]
    fn trailing_separator_is_equivalent() {
        let dir = tempfile::tempdir().unwrap();
        let plain = OutputTarget::new(dir.path(), SourceId::path("a.png"), false);
        let with_sep = OutputTarget::new(normalize_dir(dir.path()), SourceId::path("a.png"), false);
        let p1 = save_html(DOC, &plain).unwrap();
        let p2 = save_html(DOC, &with_sep).unwrap();
        assert_eq!(p1, p2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let target = OutputTarget::new(&missing, SourceId::path("cat.png"), true);
        let err = save_html(DOC, &target).unwrap_err();
        match err {
            ExportError::DestinationNotFound { path } => {
                assert!(path.contains("absent"), "{path}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!missing.exists());
        assert!(!missing.join("cat-png-ascii-art.html").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn empty_directory_is_not_found() {
        let target = OutputTarget::new("", SourceId::path("cat.png"), false);
        assert!(matches!(
            save_html(DOC, &target),
            Err(ExportError::DestinationNotFound { .. })
        ));
    }

    #[test]
    fn naming_error_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(dir.path(), SourceId::url(""), false);
        assert!(matches!(
            save_html(DOC, &target),
            Err(ExportError::Naming(NamingError::Empty))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("cat-png-ascii-art.html");
        std::fs::write(&existing, "old content that is longer than the new one ....................................").unwrap();
        let target = OutputTarget::new(dir.path(), SourceId::path("cat.png"), false);
        save_html(DOC, &target).unwrap();
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), DOC);
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("cat-png-ascii-art.html")).unwrap();
        let target = OutputTarget::new(dir.path(), SourceId::path("cat.png"), false);
        assert!(matches!(
            save_html(DOC, &target),
            Err(ExportError::Io { .. })
        ));
    }

    #[test]
    fn regular_file_as_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plainfile");
        std::fs::write(&plain, "keep").unwrap();
        let target = OutputTarget::new(&plain, SourceId::path("b.png"), false);
        assert!(matches!(
            save_html(DOC, &target),
            Err(ExportError::Io { .. })
        ));
        assert_eq!(std::fs::read_to_string(&plain).unwrap(), "keep");
    }

    #[test]
    fn partial_file_is_removed_and_failed_cleanup_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let partial = dir.path().join("b-png-ascii-art.html");
        std::fs::write(&partial, "<!DOCTYPE").unwrap();
        remove_partial(&partial);
        assert!(!partial.exists());
        // Already gone: the removal error is logged, not raised.
        remove_partial(&partial);
        assert!(!partial.exists());
    }

    #[test]
    fn report_prints_saved_line() {
        let path = Path::new("out").join("b-png-ascii-art.html");
        let mut out = Vec::new();
        report_saved(&mut out, true, &path).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Saved {}\n", path.display())
        );
    }

    #[test]
    fn no_report_prints_nothing() {
        let mut out = Vec::new();
        report_saved(&mut out, false, Path::new("out/b-png-ascii-art.html")).unwrap();
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn file_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(dir.path(), SourceId::path("cat.png"), false);
        let path = save_html(DOC, &target).unwrap();
        let mode = std::fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
