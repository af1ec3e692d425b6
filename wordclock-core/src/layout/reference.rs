//! Reference 8x8 layout
//!
//! The matrix is wired as a zig-zag starting at the bottom-left corner.
//! Numbers are LED indices as seen from the front of the face:
//!
//! ```text
//! 63 62 61 60 59 58 57 56   <- IT IS | HALF | TEN
//! 48 49 50 51 52 53 54 55   <- QUARTER | TWENTY
//! 47 46 45 44 43 42 41 40   <- FIVE | MINUTES | TO
//! 32 33 34 35 36 37 38 39   <- PAST | ONE | THREE
//! 31 30 29 28 27 26 25 24   <- TWO | FOUR | FIVE
//! 16 17 18 19 20 21 22 23   <- SIX | SEVEN | EIGHT
//! 15 14 13 12 11 10  9  8   <- NINE | TEN | ELEVEN
//!  0  1  2  3  4  5  6  7   <- TWELVE | O'CLOCK
//! ```

use super::{LedIndex, Word, WordLayout};

/// Number of LEDs in the reference matrix
pub const REFERENCE_LEDS: usize = 64;

/// Reference 8x8 word layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reference8x8;

impl WordLayout<REFERENCE_LEDS> for Reference8x8 {
    fn leds(&self, word: Word) -> &'static [LedIndex] {
        match word {
            Word::ItIs => &[63, 62],
            Word::Half => &[60, 59],
            Word::TenMin => &[57, 56],
            Word::Quarter => &[48, 49, 50, 51],
            Word::Twenty => &[52, 53, 54, 55],
            Word::FiveMin => &[47, 46],
            Word::Minutes => &[45, 44, 43, 42],
            Word::To => &[40],
            Word::Past => &[32, 33],
            Word::One => &[35, 36],
            Word::Three => &[37, 38, 39],
            Word::Two => &[31, 30],
            Word::Four => &[28, 27],
            Word::Five => &[25, 24],
            Word::Six => &[16, 17],
            Word::Seven => &[18, 19, 20],
            Word::Eight => &[21, 22, 23],
            Word::Nine => &[15, 14],
            Word::Ten => &[13],
            Word::Eleven => &[10, 9, 8],
            Word::Twelve => &[0, 1, 2],
            Word::OClock => &[4, 5, 6, 7],
        }
    }
}
