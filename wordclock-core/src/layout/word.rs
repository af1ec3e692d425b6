//! Word identifiers
//!
//! Every phrase fragment the clock face can spell. The LED positions for
//! each word live in a [`WordLayout`](super::WordLayout), not here.

use crate::phrase::DomainError;

/// A displayable phrase fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Word {
    /// "IT IS", lit for every time
    ItIs,
    /// "HALF" (minute phrase)
    Half,
    /// "TEN" (minute phrase)
    TenMin,
    /// "QUARTER"
    Quarter,
    /// "TWENTY"
    Twenty,
    /// "FIVE" (minute phrase)
    FiveMin,
    /// "MINUTES" - on the face but never lit by the renderer
    Minutes,
    To,
    Past,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    /// "O'CLOCK", lit only on the exact (rounded) hour
    OClock,
}

impl Word {
    /// Number of words on the clock face
    pub const COUNT: usize = 22;

    /// Every word, in face order
    pub const ALL: [Word; Word::COUNT] = [
        Word::ItIs,
        Word::Half,
        Word::TenMin,
        Word::Quarter,
        Word::Twenty,
        Word::FiveMin,
        Word::Minutes,
        Word::To,
        Word::Past,
        Word::One,
        Word::Two,
        Word::Three,
        Word::Four,
        Word::Five,
        Word::Six,
        Word::Seven,
        Word::Eight,
        Word::Nine,
        Word::Ten,
        Word::Eleven,
        Word::Twelve,
        Word::OClock,
    ];

    /// Hour words, indexed by `hour12 - 1`
    pub const HOURS: [Word; 12] = [
        Word::One,
        Word::Two,
        Word::Three,
        Word::Four,
        Word::Five,
        Word::Six,
        Word::Seven,
        Word::Eight,
        Word::Nine,
        Word::Ten,
        Word::Eleven,
        Word::Twelve,
    ];

    /// Get the hour word for a 12-hour clock value (1-12)
    pub fn hour(hour12: u8) -> Result<Word, DomainError> {
        match hour12 {
            1..=12 => Ok(Self::HOURS[usize::from(hour12 - 1)]),
            _ => Err(DomainError::HourOutOfRange(hour12)),
        }
    }

    /// Check if this is one of ONE..TWELVE
    pub fn is_hour(self) -> bool {
        Self::HOURS.contains(&self)
    }

    /// Text printed on the face for this word
    pub fn text(self) -> &'static str {
        match self {
            Word::ItIs => "IT IS",
            Word::Half => "HALF",
            Word::TenMin => "TEN",
            Word::Quarter => "QUARTER",
            Word::Twenty => "TWENTY",
            Word::FiveMin => "FIVE",
            Word::Minutes => "MINUTES",
            Word::To => "TO",
            Word::Past => "PAST",
            Word::One => "ONE",
            Word::Two => "TWO",
            Word::Three => "THREE",
            Word::Four => "FOUR",
            Word::Five => "FIVE",
            Word::Six => "SIX",
            Word::Seven => "SEVEN",
            Word::Eight => "EIGHT",
            Word::Nine => "NINE",
            Word::Ten => "TEN",
            Word::Eleven => "ELEVEN",
            Word::Twelve => "TWELVE",
            Word::OClock => "O'CLOCK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_lookup() {
        assert_eq!(Word::hour(1), Ok(Word::One));
        assert_eq!(Word::hour(3), Ok(Word::Three));
        assert_eq!(Word::hour(12), Ok(Word::Twelve));
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(Word::hour(0), Err(DomainError::HourOutOfRange(0)));
        assert_eq!(Word::hour(13), Err(DomainError::HourOutOfRange(13)));
    }

    #[test]
    fn test_all_words_unique() {
        for (i, a) in Word::ALL.iter().enumerate() {
            for b in &Word::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_is_hour() {
        assert_eq!(Word::ALL.iter().filter(|w| w.is_hour()).count(), 12);
        assert!(!Word::FiveMin.is_hour());
        assert!(Word::Five.is_hour());
    }
}
