// src/dashboard/palette.rs

use anyhow::{bail, Result};

/// Chart colours, cycled by dataset index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<(u8, u8, u8)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                (52, 152, 219), // blue
                (46, 204, 113), // green
                (243, 156, 18), // orange
                (231, 76, 60),  // red
                (155, 89, 182), // purple
            ],
        }
    }
}

impl Palette {
    pub fn from_rgb(colors: Vec<(u8, u8, u8)>) -> Result<Self> {
        if colors.is_empty() {
            bail!("palette needs at least one colour");
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Translucent fill for dataset `index`.
    pub fn fill(&self, index: usize) -> String {
        self.rgba(index, "0.8")
    }

    /// Opaque border for dataset `index`.
    pub fn border(&self, index: usize) -> String {
        self.rgba(index, "1")
    }

    fn rgba(&self, index: usize, alpha: &str) -> String {
        let (r, g, b) = self.colors[index % self.colors.len()];
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_cycles() {
        let p = Palette::default();
        assert_eq!(p.len(), 5);
        assert_eq!(p.fill(0), "rgba(52, 152, 219, 0.8)");
        assert_eq!(p.border(0), "rgba(52, 152, 219, 1)");
        assert_eq!(p.fill(5), p.fill(0));
        assert_eq!(p.border(7), "rgba(243, 156, 18, 1)");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::from_rgb(Vec::new()).is_err());
        let single = Palette::from_rgb(vec![(1, 2, 3)]).unwrap();
        assert_eq!(single.fill(3), "rgba(1, 2, 3, 0.8)");
    }
}
