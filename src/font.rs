//! 8x8 bitmap font.
//!
//! Only what the game prints is present: space, `.`, `!`, the `>` menu
//! selector, digits and capital letters. Each glyph is eight rows, one byte
//! per row, most significant bit leftmost.

/// One 8x8 monochrome character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub [u8; 8]);

impl Glyph {
    pub const SIZE: i32 = 8;

    pub fn is_set(&self, col: i32, row: i32) -> bool {
        if !(0..Self::SIZE).contains(&col) || !(0..Self::SIZE).contains(&row) {
            return false;
        }
        self.0[row as usize] & (0x80 >> col) != 0
    }

    /// Row-major pixel pattern
    pub fn pattern(&self) -> [bool; 64] {
        let mut out = [false; 64];
        for (i, px) in out.iter_mut().enumerate() {
            *px = self.is_set(i as i32 % Self::SIZE, i as i32 / Self::SIZE);
        }
        out
    }
}

const SPACE: Glyph = Glyph([0x00; 8]);
const PERIOD: Glyph = Glyph([0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00]);
const BANG: Glyph = Glyph([0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00]);
const SELECTOR: Glyph = Glyph([0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00]);

/// 0 through 9, then a narrow "10" for a winning score
static DIGITS: [Glyph; 11] = [
    Glyph([0x7C, 0xCE, 0xDE, 0xF6, 0xE6, 0xC6, 0x7C, 0x00]),
    Glyph([0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00]),
    Glyph([0x7C, 0xC6, 0x06, 0x7C, 0xC0, 0xC0, 0xFE, 0x00]),
    Glyph([0xFC, 0x06, 0x06, 0x3C, 0x06, 0x06, 0xFC, 0x00]),
    Glyph([0x0C, 0xCC, 0xCC, 0xCC, 0xFE, 0x0C, 0x0C, 0x00]),
    Glyph([0xFE, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00]),
    Glyph([0x7C, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0x7C, 0x00]),
    Glyph([0xFE, 0x06, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x00]),
    Glyph([0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C, 0x00]),
    Glyph([0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x06, 0x7C, 0x00]),
    Glyph([0x46, 0xC9, 0x49, 0x49, 0x49, 0x49, 0xE6, 0x00]),
];

static LETTERS: [Glyph; 26] = [
    Glyph([0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00]), // A
    Glyph([0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00]), // B
    Glyph([0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C, 0x00]), // C
    Glyph([0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8, 0x00]), // D
    Glyph([0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFE, 0x00]), // E
    Glyph([0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xC0, 0x00]), // F
    Glyph([0x7C, 0xC6, 0xC0, 0xCE, 0xC6, 0xC6, 0x7C, 0x00]), // G
    Glyph([0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0x00]), // H
    Glyph([0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00]), // I
    Glyph([0x06, 0x06, 0x06, 0x06, 0xC6, 0xC6, 0x7C, 0x00]), // J
    Glyph([0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6, 0x00]), // K
    Glyph([0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFE, 0x00]), // L
    Glyph([0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6, 0x00]), // M
    Glyph([0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00]), // N
    Glyph([0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00]), // O
    Glyph([0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0xC0, 0x00]), // P
    Glyph([0x7C, 0xC6, 0xC6, 0xC6, 0xD6, 0xDE, 0x7C, 0x06]), // Q
    Glyph([0xFC, 0xC6, 0xC6, 0xFC, 0xD8, 0xCC, 0xC6, 0x00]), // R
    Glyph([0x7C, 0xC6, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00]), // S
    Glyph([0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00]), // T
    Glyph([0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00]), // U
    Glyph([0xC6, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00]), // V
    Glyph([0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00]), // W
    Glyph([0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6, 0x00]), // X
    Glyph([0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00]), // Y
    Glyph([0xFE, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFE, 0x00]), // Z
];

/// Every character [`glyph`] knows about
pub const CHARSET: &str = " .!>0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        ' ' => Some(&SPACE),
        '.' => Some(&PERIOD),
        '!' => Some(&BANG),
        '>' => Some(&SELECTOR),
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        'A'..='Z' => Some(&LETTERS[c as usize - 'A' as usize]),
        _ => None,
    }
}

/// Glyph for a score of 0 to 10
pub fn score_glyph(score: u8) -> Option<&'static Glyph> {
    DIGITS.get(score as usize)
}

pub fn selector() -> &'static Glyph {
    &SELECTOR
}
