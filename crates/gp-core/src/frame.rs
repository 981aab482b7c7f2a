use serde::{Deserialize, Serialize};

/// Single cell in the ASCII grid.
///
/// `glyph` est une chaîne et non un `char` : un « pixel » peut être un
/// symbole multi-octets ou une séquence d'échappement.
///
/// # Example
/// ```
/// use gp_core::frame::AsciiCell;
/// let cell = AsciiCell::new("#", (255, 0, 0));
/// assert_eq!(cell.glyph, "#");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AsciiCell {
    /// Texte à afficher, inséré tel quel.
    pub glyph: String,
    /// Couleur foreground (RGB).
    pub fg: (u8, u8, u8),
}

impl AsciiCell {
    /// Crée une cellule.
    #[must_use]
    pub fn new(glyph: impl Into<String>, fg: (u8, u8, u8)) -> Self {
        Self {
            glyph: glyph.into(),
            fg,
        }
    }
}

impl Default for AsciiCell {
    fn default() -> Self {
        Self {
            glyph: " ".to_string(),
            fg: (0, 0, 0),
        }
    }
}

/// Grille de sortie ASCII, ligne par ligne.
///
/// L'ordre des lignes et des cellules est l'ordre visuel. Les lignes peuvent
/// avoir des largeurs différentes.
///
/// # Example
/// ```
/// use gp_core::frame::{AsciiGrid, AsciiCell};
/// let mut grid = AsciiGrid::new();
/// grid.push_row(vec![AsciiCell::new("@", (255, 0, 0))]);
/// grid.push_row(vec![AsciiCell::new(".", (0, 0, 0)), AsciiCell::new(".", (0, 0, 0))]);
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.cell_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AsciiGrid {
    rows: Vec<Vec<AsciiCell>>,
}

impl AsciiGrid {
    /// Grille vide.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from already ordered rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<AsciiCell>>) -> Self {
        Self { rows }
    }

    /// Append a row at the bottom of the grid.
    pub fn push_row(&mut self, row: Vec<AsciiCell>) {
        self.rows.push(row);
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<AsciiCell>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Somme des largeurs de toutes les lignes.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Total byte length of every glyph, used to size output buffers.
    #[must_use]
    pub fn glyph_bytes(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .map(|cell| cell.glyph.len())
            .sum()
    }
}
