//! Word layout
//!
//! Maps each [`Word`] to the LED positions that spell it on a particular
//! matrix. Swapping the matrix size or face design means providing a new
//! [`WordLayout`]; the renderer does not change.

pub mod reference;
pub mod word;

pub use reference::{Reference8x8, REFERENCE_LEDS};
pub use word::Word;

use crate::phrase::{DisplayTime, Phrase};

/// Index of an LED in the physical chain (0 = first LED after the data pin)
pub type LedIndex = u16;

/// Layout validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Word has no LEDs assigned
    EmptyWord(Word),
    /// Word references an LED outside the matrix
    IndexOutOfRange { word: Word, index: LedIndex },
    /// Two words lit for the same time share an LED
    Overlap {
        first: Word,
        second: Word,
        index: LedIndex,
    },
}

/// Static word-to-LED table for an `N`-LED matrix
///
/// Implementations are expected to be exhaustive `match` tables over
/// [`Word`], so a missing word is a compile error rather than a runtime
/// lookup failure.
pub trait WordLayout<const N: usize> {
    /// LED positions for a word, in reading order
    fn leds(&self, word: Word) -> &'static [LedIndex];

    /// Check the table against the matrix
    ///
    /// Every index must be in `0..N`, every word must have at least one LED,
    /// and no LED may be shared by two words that are lit for the same
    /// displayed time. Words that are never lit together may share LEDs.
    fn validate(&self) -> Result<(), LayoutError> {
        for word in Word::ALL {
            let leds = self.leds(word);
            if leds.is_empty() {
                return Err(LayoutError::EmptyWord(word));
            }
            if let Some(&index) = leds.iter().find(|&&index| usize::from(index) >= N) {
                return Err(LayoutError::IndexOutOfRange { word, index });
            }
        }

        for time in DisplayTime::all() {
            // Pipeline is total over DisplayTime, so this cannot fail
            let Ok(phrase) = Phrase::for_time(time) else {
                continue;
            };

            let mut owners: [Option<Word>; N] = [None; N];
            for word in phrase.words() {
                for &index in self.leds(word) {
                    let slot = &mut owners[usize::from(index)];
                    if let Some(first) = *slot {
                        return Err(LayoutError::Overlap {
                            first,
                            second: word,
                            index,
                        });
                    }
                    *slot = Some(word);
                }
            }
        }

        Ok(())
    }
}
