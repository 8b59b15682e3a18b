// crates/chart/src/bar.rs

use std::num::NonZeroU32;

/// Glyph drawn for every whole unit of scale.
pub const FULL_BLOCK: char = '█';

/// Partial-unit glyphs. Index 0 is never selected by the index formula and
/// only exists so the remaining entries line up with eighths of a block.
pub const DEFAULT_FRACTIONAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Glyphs used to draw a bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    full: char,
    fractional: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            full: FULL_BLOCK,
            fractional: DEFAULT_FRACTIONAL_BLOCKS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl Palette {
    pub fn new<I>(full: char, fractional: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            full,
            fractional: fractional.into_iter().map(Into::into).collect(),
        }
    }

    /// Palette that never appends a fractional glyph.
    pub fn without_fractions(full: char) -> Self {
        Self {
            full,
            fractional: Vec::new(),
        }
    }

    pub fn full(&self) -> char {
        self.full
    }

    pub fn fractional(&self) -> &[String] {
        &self.fractional
    }
}

/// Render `count` as a bar of `palette` glyphs where each full glyph stands
/// for `scale` units and at most `max_width` full glyphs are drawn.
///
/// A bar that hits `max_width` is cut silently; callers print the numeric
/// count next to it.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use chart::{Palette, generate_bar};
///
/// let scale = NonZeroU32::new(10).unwrap();
/// assert_eq!(generate_bar(11, scale, 60, &Palette::default()), "█▏");
/// assert_eq!(generate_bar(20, scale, 60, &Palette::default()), "██");
/// assert_eq!(generate_bar(0, scale, 60, &Palette::default()), "");
/// ```
pub fn generate_bar(count: i64, scale: NonZeroU32, max_width: u32, palette: &Palette) -> String {
    if count <= 0 {
        return String::new();
    }

    let scale = i64::from(scale.get());
    let max_width = i64::from(max_width);
    let full_blocks = count / scale;
    let remainder = count % scale;

    let display_blocks = full_blocks.min(max_width);
    let mut bar: String = std::iter::repeat_n(palette.full, display_blocks as usize).collect();

    let fractional = palette.fractional();
    if display_blocks < max_width && remainder > 0 && !fractional.is_empty() {
        let steps = (fractional.len() - 1) as i64;
        // ceil(remainder / scale * steps) without going through floats
        let index = (remainder * steps + scale - 1) / scale;
        let index = index.max(1).min(steps) as usize;
        bar.push_str(&fractional[index]);
    }

    bar
}
