//! Drawing surface the game talks to.
//!
//! The core never touches video memory. It asks a [`Renderer`] to fill and
//! clear rectangles; glyph and text drawing are built on top of `fill_rect`,
//! so an implementation only has to provide the two primitives.

use crate::font::{self, Glyph};
use crate::params::Params;

/// 15-bit direct color, `0bBBBBBGGGGGRRRRR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const LIME: Color = Color(0x03E0);
    pub const BLUE: Color = Color(0x7C00);
    pub const WHITE: Color = Color(0x7FFF);

    pub const BACKGROUND: Color = Color::BLACK;
    pub const FOREGROUND: Color = Color::WHITE;

    /// Expand to `0x00RRGGBB`
    pub fn to_rgb888(self) -> u32 {
        let expand = |c: u16| -> u32 {
            let c = (c & 0x1F) as u32;
            (c << 3) | (c >> 2)
        };
        let r = expand(self.0);
        let g = expand(self.0 >> 5);
        let b = expand(self.0 >> 10);
        (r << 16) | (g << 8) | b
    }
}

pub const CHAR_SIZE: i32 = Glyph::SIZE;
pub const LINE_HEIGHT: i32 = 12;
pub const LINE_CHARS: usize = 10;

/// Top row of the doubled score digits
pub const SCORE_Y: i32 = 10;
pub const HUMAN_SCORE_X: i32 = Params::SCREEN_WIDTH / 4 - 8;
pub const CPU_SCORE_X: i32 = 3 * Params::SCREEN_WIDTH / 4 - 8;
pub const LABEL_Y: i32 = Params::SCREEN_HEIGHT - LINE_HEIGHT - SCORE_Y;

/// Left edge of a centred ten-character line
pub const TEXT_X: i32 = Params::SCREEN_WIDTH / 2 - CHAR_SIZE * LINE_CHARS as i32 / 2;
pub const BANNER_Y: i32 = Params::SCREEN_HEIGHT / 2 - CHAR_SIZE / 2;
pub const MENU_TEXT_Y: i32 = Params::SCREEN_HEIGHT / 2 - 16;
pub const MENU_ITEM_1: i32 = MENU_TEXT_Y + 2 * LINE_HEIGHT;
pub const MENU_ITEM_2: i32 = MENU_ITEM_1 + LINE_HEIGHT;

pub trait Renderer {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Paint `[x1, x2) x [y1, y2)` with the background color
    fn clear_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.fill_rect(x1, y1, x2 - x1, y2 - y1, Color::BACKGROUND);
    }

    fn draw_glyph(&mut self, glyph: &Glyph, x: i32, y: i32) {
        draw_scaled(self, glyph, x, y, 1);
    }

    /// Double-size glyph on the score row
    fn draw_score_glyph(&mut self, glyph: &Glyph, x: i32) {
        draw_scaled(self, glyph, x, SCORE_Y, 2);
    }

    /// Draw one glyph per character, left to right.
    ///
    /// Full lines are [`LINE_CHARS`] wide; shorter strings such as the player
    /// labels draw only their own cells.
    ///
    /// # Panics
    ///
    /// If `text` holds a character outside [`font::CHARSET`].
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        for (i, c) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(c) else {
                panic!("no glyph for {c:?}");
            };
            self.draw_glyph(glyph, x + i as i32 * CHAR_SIZE, y);
        }
    }
}

fn draw_scaled<R: Renderer + ?Sized>(r: &mut R, glyph: &Glyph, x: i32, y: i32, scale: i32) {
    for (i, lit) in glyph.pattern().into_iter().enumerate() {
        let (col, row) = (i as i32 % Glyph::SIZE, i as i32 / Glyph::SIZE);
        let color = if lit {
            Color::FOREGROUND
        } else {
            Color::BACKGROUND
        };
        r.fill_rect(x + col * scale, y + row * scale, scale, scale, color);
    }
}

/// Show the `>` selector beside menu item `selection` (0 or 1)
pub fn draw_menu_cursor<R: Renderer + ?Sized>(r: &mut R, selection: i32) {
    r.clear_rect(TEXT_X - CHAR_SIZE, MENU_ITEM_1, TEXT_X, MENU_ITEM_2 + CHAR_SIZE);
    r.draw_glyph(
        font::selector(),
        TEXT_X - CHAR_SIZE,
        MENU_ITEM_1 + selection * LINE_HEIGHT,
    );
}
