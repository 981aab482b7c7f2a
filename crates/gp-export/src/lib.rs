//! Styled HTML export for glyphpage.
//!
//! Builds a self-contained HTML document from an [`AsciiGrid`] and writes it
//! next to the other export variants of the same source.

pub mod error;
pub mod html;
pub mod naming;
pub mod save;

use std::path::PathBuf;

use gp_core::color::BackgroundColor;
use gp_core::frame::AsciiGrid;

pub use error::{ExportError, NamingError};
pub use html::build_html;
pub use naming::{SourceId, derive_file_name};
pub use save::{OutputTarget, normalize_dir, report_saved, save_html};

/// Construit puis sauvegarde le document HTML d'une grille.
///
/// Retourne le chemin complet du fichier écrit.
///
/// # Errors
/// Propagates every [`ExportError`] from [`save_html`]. Building never fails.
///
/// # Example
/// ```no_run
/// use gp_core::color::BackgroundColor;
/// use gp_core::frame::{AsciiCell, AsciiGrid};
/// use gp_export::{OutputTarget, SourceId, export_html};
///
/// let grid = AsciiGrid::from_rows(vec![vec![AsciiCell::new("#", (255, 0, 0))]]);
/// let target = OutputTarget::new("out", SourceId::path("photo.png"), true);
/// export_html(&grid, true, &target, BackgroundColor::default()).unwrap();
/// ```
pub fn export_html(
    grid: &AsciiGrid,
    colored: bool,
    target: &OutputTarget,
    bg: BackgroundColor,
) -> Result<PathBuf, ExportError> {
    let html = build_html(grid, colored, bg);
    save_html(&html, target)
}
