//! Time-to-phrase pipeline
//!
//! Turns a wall-clock time into the words of a natural-language phrase.
//! Each step is a small total function so it can be tested on its own:
//!
//! ```text
//! WallTime ──round_to_five──► DisplayTime ──twelve_hour──► spoken_hour ──┐
//!     (hour carry on :60)          │                                     │
//!                                  └────minute_phrase──► MinutePhrase ───┴──► Phrase::words
//! ```
//!
//! Minutes:
//! - XX:00 -> "O'CLOCK"
//! - XX:05 -> "FIVE PAST" ... XX:25 -> "TWENTY FIVE PAST"
//! - XX:30 -> "HALF PAST"
//! - XX:35 -> "TWENTY FIVE TO" (next hour) ... XX:55 -> "FIVE TO" (next hour)

use core::fmt::{self, Write};
use core::iter;

use heapless::Vec;

use crate::layout::Word;

/// Displayed minutes are snapped to multiples of this
pub const MINUTE_STEP: u8 = 5;

/// Hours in a day (24-hour input)
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// Last rounded minute that is still phrased as PAST
pub const LAST_PAST_MINUTE: u8 = 30;

/// Longest phrase: IT IS + TWENTY + FIVE + TO + hour
pub const MAX_PHRASE_WORDS: usize = 5;

/// Caller supplied a time outside the clock's domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainError {
    /// Hour outside 0-23 (24-hour input) or 1-12 (hour word lookup)
    HourOutOfRange(u8),
    /// Minute outside 0-59, or not a displayable minute step
    MinuteOutOfRange(u8),
}

/// Validated 24-hour wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    /// Create a wall-clock time
    ///
    /// # Arguments
    /// - `hour`: 0-23
    /// - `minute`: 0-59
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour >= HOURS_PER_DAY {
            return Err(DomainError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(DomainError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Build from seconds since local midnight (wraps at 24h)
    pub fn from_seconds_of_day(seconds: u32) -> Self {
        let minutes = (seconds / 60) % (24 * 60);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// Round a minute to the nearest multiple of five
///
/// Uses `floor((minute + 2) / 5) * 5`, so :02 rounds down to :00 and :03
/// rounds up to :05. Minutes 58 and 59 round to 60; the carry into the next
/// hour is handled by [`DisplayTime::from_wall`].
pub fn round_to_five(minute: u8) -> u8 {
    let rounded = (u16::from(minute) + 2) / u16::from(MINUTE_STEP) * u16::from(MINUTE_STEP);
    rounded as u8
}

/// Convert a 24-hour value to the 12-hour face (0 and 12 both show TWELVE)
pub fn twelve_hour(hour24: u8) -> u8 {
    match hour24 % 12 {
        0 => 12,
        hour => hour,
    }
}

/// Hour named by the phrase
///
/// Past the half hour the phrase counts down TO the next hour, so the
/// displayed hour advances by one (TWELVE wraps to ONE).
pub fn spoken_hour(hour12: u8, rounded_minute: u8) -> u8 {
    if rounded_minute > LAST_PAST_MINUTE {
        hour12 % 12 + 1
    } else {
        hour12
    }
}

/// Time after rounding and hour carry
///
/// This is the key for change detection: two wall times with the same
/// `DisplayTime` produce the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTime {
    /// 0-23, after carry
    hour: u8,
    /// 0-55, multiple of [`MINUTE_STEP`]
    minute: u8,
}

impl DisplayTime {
    /// Validate and round a raw `(hour, minute)` pair
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        WallTime::new(hour, minute).map(Self::from_wall)
    }

    /// Round the minute and carry into the next hour on :60
    pub fn from_wall(time: WallTime) -> Self {
        let rounded = round_to_five(time.minute);
        if rounded == MINUTES_PER_HOUR {
            Self {
                hour: (time.hour + 1) % HOURS_PER_DAY,
                minute: 0,
            }
        } else {
            Self {
                hour: time.hour,
                minute: rounded,
            }
        }
    }

    /// Every displayable time in a day, in order
    pub fn all() -> impl Iterator<Item = DisplayTime> {
        (0..HOURS_PER_DAY).flat_map(|hour| {
            (0..MINUTES_PER_HOUR)
                .step_by(usize::from(MINUTE_STEP))
                .map(move |minute| DisplayTime { hour, minute })
        })
    }

    /// Hour after carry, 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Rounded minute, 0-55
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// Minute amount spelled before PAST/TO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Amount {
    Five,
    Ten,
    Quarter,
    Twenty,
    TwentyFive,
    Half,
}

impl Amount {
    /// Amount for a whole number of minutes (5, 10, ... 30)
    pub fn from_minutes(minutes: u8) -> Result<Self, DomainError> {
        match minutes {
            5 => Ok(Amount::Five),
            10 => Ok(Amount::Ten),
            15 => Ok(Amount::Quarter),
            20 => Ok(Amount::Twenty),
            25 => Ok(Amount::TwentyFive),
            30 => Ok(Amount::Half),
            _ => Err(DomainError::MinuteOutOfRange(minutes)),
        }
    }

    /// Words that spell this amount
    pub fn words(self) -> &'static [Word] {
        match self {
            Amount::Five => &[Word::FiveMin],
            Amount::Ten => &[Word::TenMin],
            Amount::Quarter => &[Word::Quarter],
            Amount::Twenty => &[Word::Twenty],
            Amount::TwentyFive => &[Word::Twenty, Word::FiveMin],
            Amount::Half => &[Word::Half],
        }
    }
}

/// Minute part of the phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MinutePhrase {
    /// Exactly on the hour
    OClock,
    /// Minutes after the hour (5-30)
    Past(Amount),
    /// Minutes before the next hour (5-25)
    To(Amount),
}

/// Select the minute phrase for a rounded minute (0-55, step 5)
pub fn minute_phrase(rounded_minute: u8) -> Result<MinutePhrase, DomainError> {
    match rounded_minute {
        0 => Ok(MinutePhrase::OClock),
        1..=LAST_PAST_MINUTE => Amount::from_minutes(rounded_minute).map(MinutePhrase::Past),
        31..=59 => Amount::from_minutes(MINUTES_PER_HOUR - rounded_minute)
            .map(MinutePhrase::To)
            .map_err(|_| DomainError::MinuteOutOfRange(rounded_minute)),
        _ => Err(DomainError::MinuteOutOfRange(rounded_minute)),
    }
}

/// Complete phrase for a displayed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phrase {
    minutes: MinutePhrase,
    hour: Word,
}

impl Phrase {
    /// Build the phrase for a displayed time
    pub fn for_time(time: DisplayTime) -> Result<Self, DomainError> {
        let hour12 = spoken_hour(twelve_hour(time.hour), time.minute);
        Ok(Self {
            minutes: minute_phrase(time.minute)?,
            hour: Word::hour(hour12)?,
        })
    }

    pub fn minutes(&self) -> MinutePhrase {
        self.minutes
    }

    /// The single hour word (ONE..TWELVE)
    pub fn hour_word(&self) -> Word {
        self.hour
    }

    /// Words to light, in reading order
    pub fn words(&self) -> Vec<Word, MAX_PHRASE_WORDS> {
        let (amount, link, tail): (&[Word], _, _) = match self.minutes {
            MinutePhrase::OClock => (&[], None, Some(Word::OClock)),
            MinutePhrase::Past(amount) => (amount.words(), Some(Word::Past), None),
            MinutePhrase::To(amount) => (amount.words(), Some(Word::To), None),
        };

        // At most IT IS, two amount words, the link and the hour
        iter::once(Word::ItIs)
            .chain(amount.iter().copied())
            .chain(link)
            .chain(iter::once(self.hour))
            .chain(tail)
            .collect()
    }

    /// Check whether the phrase lights a word
    pub fn contains(&self, word: Word) -> bool {
        self.words().contains(&word)
    }

    /// Write the phrase as text, e.g. "IT IS TWENTY FIVE TO THREE"
    pub fn write_text<W: Write>(&self, out: &mut W) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            out.write_str(word.text())?;
        }
        Ok(())
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn phrase(hour: u8, minute: u8) -> Phrase {
        Phrase::for_time(DisplayTime::new(hour, minute).unwrap()).unwrap()
    }

    #[test]
    fn test_round_to_five_midpoint() {
        assert_eq!(round_to_five(0), 0);
        assert_eq!(round_to_five(2), 0);
        assert_eq!(round_to_five(3), 5);
        assert_eq!(round_to_five(7), 5);
        assert_eq!(round_to_five(8), 10);
        assert_eq!(round_to_five(57), 55);
        assert_eq!(round_to_five(58), 60);
        assert_eq!(round_to_five(59), 60);
    }

    #[test]
    fn test_wall_time_rejects_out_of_range() {
        assert_eq!(WallTime::new(24, 0), Err(DomainError::HourOutOfRange(24)));
        assert_eq!(WallTime::new(0, 60), Err(DomainError::MinuteOutOfRange(60)));
        assert!(WallTime::new(23, 59).is_ok());
    }

    #[test]
    fn test_wall_time_from_seconds_of_day() {
        let t = WallTime::from_seconds_of_day(43_200);
        assert_eq!((t.hour(), t.minute()), (12, 0));

        let t = WallTime::from_seconds_of_day(86_399);
        assert_eq!((t.hour(), t.minute()), (23, 59));

        // Wraps past midnight
        let t = WallTime::from_seconds_of_day(86_400 + 65);
        assert_eq!((t.hour(), t.minute()), (0, 1));
    }

    #[test]
    fn test_carry_into_next_hour() {
        let t = DisplayTime::new(9, 58).unwrap();
        assert_eq!((t.hour(), t.minute()), (10, 0));

        // Midnight wrap
        let t = DisplayTime::new(23, 58).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        // :57 stays in the hour
        let t = DisplayTime::new(23, 57).unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 55));
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(twelve_hour(0), 12);
        assert_eq!(twelve_hour(1), 1);
        assert_eq!(twelve_hour(12), 12);
        assert_eq!(twelve_hour(13), 1);
        assert_eq!(twelve_hour(23), 11);
    }

    #[test]
    fn test_spoken_hour() {
        assert_eq!(spoken_hour(2, 30), 2);
        assert_eq!(spoken_hour(2, 35), 3);
        assert_eq!(spoken_hour(11, 55), 12);
        assert_eq!(spoken_hour(12, 35), 1);
        assert_eq!(spoken_hour(12, 0), 12);
    }

    #[test]
    fn test_minute_phrase_table() {
        use Amount::*;
        use MinutePhrase::*;

        let expected = [
            (0, OClock),
            (5, Past(Five)),
            (10, Past(Ten)),
            (15, Past(Quarter)),
            (20, Past(Twenty)),
            (25, Past(TwentyFive)),
            (30, Past(Half)),
            (35, To(TwentyFive)),
            (40, To(Twenty)),
            (45, To(Quarter)),
            (50, To(Ten)),
            (55, To(Five)),
        ];

        for (minute, phrase) in expected {
            assert_eq!(minute_phrase(minute), Ok(phrase), "minute {}", minute);
        }
    }

    #[test]
    fn test_minute_phrase_rejects_non_step() {
        assert_eq!(minute_phrase(7), Err(DomainError::MinuteOutOfRange(7)));
        assert_eq!(minute_phrase(33), Err(DomainError::MinuteOutOfRange(33)));
        assert_eq!(minute_phrase(60), Err(DomainError::MinuteOutOfRange(60)));
    }

    #[test]
    fn test_phrase_text() {
        let mut text: heapless::String<48> = heapless::String::new();
        phrase(2, 32).write_text(&mut text).unwrap();
        assert_eq!(text.as_str(), "IT IS HALF PAST TWO");

        text.clear();
        phrase(2, 33).write_text(&mut text).unwrap();
        assert_eq!(text.as_str(), "IT IS TWENTY FIVE TO THREE");

        text.clear();
        phrase(0, 2).write_text(&mut text).unwrap();
        assert_eq!(text.as_str(), "IT IS TWELVE O'CLOCK");
    }

    #[test]
    fn test_phrase_words_order() {
        assert_eq!(
            phrase(14, 47).words().as_slice(),
            &[Word::ItIs, Word::Quarter, Word::To, Word::Three]
        );
        assert_eq!(
            phrase(9, 12).words().as_slice(),
            &[Word::ItIs, Word::TenMin, Word::Past, Word::Nine]
        );
        assert_eq!(
            phrase(12, 0).words().as_slice(),
            &[Word::ItIs, Word::Twelve, Word::OClock]
        );
    }

    #[test]
    fn test_all_display_times() {
        assert_eq!(DisplayTime::all().count(), 24 * 12);
        for time in DisplayTime::all() {
            assert!(Phrase::for_time(time).is_ok(), "{:?}", time);
        }
    }

    #[test]
    fn test_phrase_words_fit_and_start_with_it_is() {
        for time in DisplayTime::all() {
            let words = Phrase::for_time(time).unwrap().words();
            assert_eq!(words.first(), Some(&Word::ItIs), "{:?}", time);
            assert!(words.len() >= 3 && words.len() <= MAX_PHRASE_WORDS, "{:?}", time);
        }
        assert_eq!(
            phrase(3, 37).words().as_slice(),
            &[Word::ItIs, Word::Twenty, Word::FiveMin, Word::To, Word::Four]
        );
    }

    proptest! {
        #[test]
        fn prop_round_to_five_matches_formula(minute in 0u8..60) {
            let rounded = round_to_five(minute);
            prop_assert_eq!(rounded % MINUTE_STEP, 0);
            prop_assert!(rounded <= 60);
            prop_assert_eq!(u32::from(rounded), (u32::from(minute) + 2) / 5 * 5);
            // Never more than two minutes away
            prop_assert!((i16::from(rounded) - i16::from(minute)).abs() <= 2);
        }

        #[test]
        fn prop_display_time_in_range(hour in 0u8..24, minute in 0u8..60) {
            let t = DisplayTime::new(hour, minute).unwrap();
            prop_assert!(t.hour() < HOURS_PER_DAY);
            prop_assert!(t.minute() <= 55);
            prop_assert_eq!(t.minute() % MINUTE_STEP, 0);
        }

        #[test]
        fn prop_out_of_range_rejected(hour in 24u8..=255, minute in 60u8..=255) {
            prop_assert_eq!(DisplayTime::new(hour, 0), Err(DomainError::HourOutOfRange(hour)));
            prop_assert_eq!(DisplayTime::new(0, minute), Err(DomainError::MinuteOutOfRange(minute)));
        }
    }
}
