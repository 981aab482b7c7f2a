use gp_core::color::{BackgroundColor, write_css_rgb};
use gp_core::frame::AsciiGrid;

/// En-tête fixe jusqu'à la couleur de fond.
const HEAD_START: &str = "<!DOCTYPE html><html lang=\"en\">\n\
<head>\n\
<meta charset=\"UTF-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
<title>ASCII Art</title>\n\
<style>\n\
body { background-color:";

/// Suite de l'en-tête. Les espaces doivent être rendus tels quels, l'alignement
/// des glyphes porte l'image.
const HEAD_END: &str = "; }\n\
span { display: inline-block; white-space: pre; font-family: monospace; }\n\
</style>\n\
</head><body><pre>";

const DOC_END: &str = "</pre></body></html>";

/// `#rrggbb`.
const HEX_LITERAL_LEN: usize = 7;

/// Marqueur de fin de ligne. Les spans sont inline, sans lui toutes les
/// lignes seraient concaténées.
pub const LINE_BREAK: &str = "<br>";

/// Approximate markup bytes per colored span (`<span style="color:rgb(255,255,255)"></span>`).
const COLORED_SPAN_OVERHEAD: usize = 45;
const PLAIN_SPAN_OVERHEAD: usize = 13;

/// Construit le document HTML complet d'une grille.
///
/// Un `<span>` par cellule, dans l'ordre de la grille, puis un `<br>` par
/// ligne. Avec `colored`, chaque span porte `color:rgb(r,g,b)` en décimal ;
/// sinon aucun style de couleur n'est émis. Le fond vient des trois premières
/// composantes de `bg`. Les glyphes sont insérés sans échappement.
///
/// # Example
/// ```
/// use gp_core::color::BackgroundColor;
/// use gp_core::frame::{AsciiCell, AsciiGrid};
/// use gp_export::html::build_html;
///
/// let grid = AsciiGrid::from_rows(vec![vec![
///     AsciiCell::new("#", (255, 0, 0)),
///     AsciiCell::new(".", (0, 0, 0)),
/// ]]);
/// let html = build_html(&grid, true, BackgroundColor::new(0, 0, 0, 255));
/// assert!(html.contains("background-color:#000000"));
/// assert!(html.contains(
///     "<span style=\"color:rgb(255,0,0)\">#</span><span style=\"color:rgb(0,0,0)\">.</span><br>"
/// ));
/// ```
#[must_use]
pub fn build_html(grid: &AsciiGrid, colored: bool, bg: BackgroundColor) -> String {
    let overhead = if colored {
        COLORED_SPAN_OVERHEAD
    } else {
        PLAIN_SPAN_OVERHEAD
    };
    let capacity = HEAD_START.len()
        + HEX_LITERAL_LEN
        + HEAD_END.len()
        + grid.glyph_bytes()
        + grid.cell_count() * overhead
        + grid.row_count() * LINE_BREAK.len()
        + DOC_END.len();
    let mut out = String::with_capacity(capacity);

    out.push_str(HEAD_START);
    out.push_str(&bg.hex_triplet());
    out.push_str(HEAD_END);

    for row in grid.rows() {
        for cell in row {
            if colored {
                out.push_str("<span style=\"color:");
                write_css_rgb(&mut out, cell.fg);
                out.push_str("\">");
            } else {
                out.push_str("<span>");
            }
            out.push_str(&cell.glyph);
            out.push_str("</span>");
        }
        out.push_str(LINE_BREAK);
    }

    out.push_str(DOC_END);

    log::debug!(
        "Document HTML construit : {} lignes, {} cellules, {} octets",
        grid.row_count(),
        grid.cell_count(),
        out.len()
    );
    out
}
