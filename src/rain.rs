use std::time::Duration;

pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Chance per frame that a column past the bottom edge restarts at the top.
const RESET_CHANCE: f64 = 0.025;

const GLYPHS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9',
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainSettings {
    pub enabled: bool,
    pub frame_interval: Duration,
    pub font_size: f64,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// Column drops for the background canvas, measured in rows of `font_size`.
#[derive(Clone, Debug)]
pub struct RainField {
    font_size: f64,
    height: f64,
    drops: Vec<u32>,
}

impl RainField {
    pub fn new(width: f64, height: f64, font_size: f64) -> Self {
        let mut field = Self {
            font_size,
            height: 0.0,
            drops: Vec::new(),
        };
        field.resize(width, height);
        field
    }

    /// Keeps existing column positions and adds or trims columns for the new width.
    pub fn resize(&mut self, width: f64, height: f64) {
        let columns = (width.max(0.0) / self.font_size).floor() as usize;
        self.drops.resize(columns, 1);
        self.height = height.max(0.0);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Advances every column one row and returns the glyph to paint for each.
    ///
    /// `random` must yield values in `[0, 1)`.
    pub fn step(&mut self, mut random: impl FnMut() -> f64) -> Vec<Glyph> {
        let font_size = self.font_size;
        let height = self.height;

        self.drops
            .iter_mut()
            .enumerate()
            .map(|(column, drop)| {
                let glyph = Glyph {
                    ch: pick_glyph(random()),
                    x: column as f64 * font_size,
                    y: f64::from(*drop) * font_size,
                };
                if glyph.y > height && random() < RESET_CHANCE {
                    *drop = 0;
                }
                *drop += 1;
                glyph
            })
            .collect()
    }
}

fn pick_glyph(sample: f64) -> char {
    let index = (sample.clamp(0.0, 1.0) * GLYPHS.len() as f64) as usize;
    GLYPHS[index.min(GLYPHS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width_and_font_size() {
        let field = RainField::new(140.0, 100.0, 14.0);
        assert_eq!(field.columns(), 10);

        let narrow = RainField::new(13.0, 100.0, 14.0);
        assert_eq!(narrow.columns(), 0);
    }

    #[test]
    fn each_step_moves_a_column_down_one_row() {
        let mut field = RainField::new(28.0, 1_000.0, 14.0);

        let first = field.step(|| 0.5);
        let second = field.step(|| 0.5);

        assert_eq!(first.len(), 2);
        assert_eq!(first[1].x, 14.0);
        assert_eq!(first[0].y, 14.0);
        assert_eq!(second[0].y, 28.0);
    }

    #[test]
    fn column_past_bottom_resets_only_on_a_low_roll() {
        let mut field = RainField::new(14.0, 20.0, 14.0);
        field.step(|| 0.5);
        field.step(|| 0.5);

        // y = 42 > 20, high roll keeps falling
        assert_eq!(field.step(|| 0.9)[0].y, 42.0);
        // y = 56 > 20, low roll restarts from the top
        assert_eq!(field.step(|| 0.0)[0].y, 56.0);
        assert_eq!(field.step(|| 0.9)[0].y, 14.0);
    }

    #[test]
    fn resize_keeps_existing_columns() {
        let mut field = RainField::new(28.0, 1_000.0, 14.0);
        field.step(|| 0.5);

        field.resize(42.0, 1_000.0);
        let glyphs = field.step(|| 0.5);

        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[0].y, 28.0);
        assert_eq!(glyphs[2].y, 14.0);
    }

    #[test]
    fn glyph_choice_is_total_over_the_unit_interval() {
        assert_eq!(pick_glyph(0.0), 'ア');
        assert_eq!(pick_glyph(1.0), '9');
        assert_eq!(pick_glyph(0.999), '9');
    }
}
