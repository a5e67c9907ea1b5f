//! Text measurement.
//!
//! Glyph metrics belong to the font asset; the menu only needs horizontal
//! advances to size its selector. [`GlyphTable`] is a simple table-backed
//! implementation for hosts that already have the metrics at hand.

use rustc_hash::FxHashMap;

/// Source of per-glyph horizontal advances.
pub trait GlyphMetrics {
    /// Horizontal advance of `ch`, or `None` if the font has no such glyph.
    fn horizontal_advance(&self, ch: char) -> Option<f32>;
}

/// Sums glyph advances of `text` and scales the result.
///
/// Glyphs missing from the font contribute nothing.
#[must_use]
pub fn measure_text(metrics: &dyn GlyphMetrics, text: &str, multiplier: f32) -> f32 {
    let advance: f32 = text
        .chars()
        .filter_map(|ch| metrics.horizontal_advance(ch))
        .sum();
    advance * multiplier
}

/// Glyph advances looked up from a hash table.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    advances: FxHashMap<char, f32>,
}

impl GlyphTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every character in `chars` gets the same advance.
    #[must_use]
    pub fn monospace(chars: impl IntoIterator<Item = char>, advance: f32) -> Self {
        Self {
            advances: chars.into_iter().map(|ch| (ch, advance)).collect(),
        }
    }

    pub fn insert(&mut self, ch: char, advance: f32) {
        self.advances.insert(ch, advance);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.advances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }
}

impl GlyphMetrics for GlyphTable {
    fn horizontal_advance(&self, ch: char) -> Option<f32> {
        self.advances.get(&ch).copied()
    }
}

impl FromIterator<(char, f32)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (char, f32)>>(iter: I) -> Self {
        Self {
            advances: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_glyphs_contribute_nothing() {
        let table: GlyphTable = [('a', 10.0), ('b', 20.0)].into_iter().collect();
        let width = measure_text(&table, "abz", 0.5);
        assert!((width - 15.0).abs() < 1e-6);
    }
}
