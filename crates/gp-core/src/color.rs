use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Couleur de fond RGBA d'un export.
///
/// Seuls les trois premiers canaux sont rendus : le fond d'un document HTML
/// n'a pas de canal de transparence, l'alpha est accepté puis ignoré.
///
/// # Example
/// ```
/// use gp_core::color::BackgroundColor;
/// let bg = BackgroundColor::new(255, 128, 0, 10);
/// assert_eq!(bg.hex_triplet(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct BackgroundColor(pub [u8; 4]);

impl BackgroundColor {
    /// Build a background color from its four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Composantes (r, g, b), alpha exclu.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.0[0], self.0[1], self.0[2])
    }

    /// Littéral `#rrggbb` (7 caractères), hexadécimal minuscule.
    ///
    /// # Example
    /// ```
    /// use gp_core::color::BackgroundColor;
    /// assert_eq!(BackgroundColor::new(0, 0, 0, 255).hex_triplet(), "#000000");
    /// assert_eq!(BackgroundColor::new(1, 2, 3, 0).hex_triplet(), "#010203");
    /// ```
    #[must_use]
    pub fn hex_triplet(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self([0, 0, 0, 100])
    }
}

impl From<[u8; 4]> for BackgroundColor {
    fn from(v: [u8; 4]) -> Self {
        Self(v)
    }
}

impl From<BackgroundColor> for [u8; 4] {
    fn from(c: BackgroundColor) -> Self {
        c.0
    }
}

impl FromStr for BackgroundColor {
    type Err = CoreError;

    /// Parse `"r,g,b,a"`, each component in [0, 255].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidBackground {
            value: s.to_string(),
        };
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>, _>>()?;
        match parts.as_slice() {
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
            _ => Err(invalid()),
        }
    }
}

/// Écrit une déclaration CSS `rgb(r,g,b)` en décimal dans `out`.
///
/// # Example
/// ```
/// use gp_core::color::write_css_rgb;
/// let mut s = String::new();
/// write_css_rgb(&mut s, (255, 0, 7));
/// assert_eq!(s, "rgb(255,0,7)");
/// ```
pub fn write_css_rgb(out: &mut String, (r, g, b): (u8, u8, u8)) {
    // Writing into a String cannot fail.
    let _ = write!(out, "rgb({r},{g},{b})");
}
