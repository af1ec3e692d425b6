//! Frame renderer
//!
//! Turns a wall-clock time into the frame of LEDs to light, and remembers
//! the last displayed time so callers only repaint the matrix when the
//! rounded time actually changes.

use crate::frame::Frame;
use crate::layout::{Reference8x8, WordLayout, REFERENCE_LEDS};
use crate::phrase::{DisplayTime, DomainError, Phrase, WallTime};

/// Result of a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rendered<const N: usize> {
    /// Time after rounding and hour carry
    pub time: DisplayTime,
    /// LEDs to light
    pub frame: Frame<N>,
    /// False if this is the same displayed time as the previous render
    pub changed: bool,
}

/// Last rendered time and its frame
#[derive(Debug, Clone, Copy)]
struct DisplayState<const N: usize> {
    time: DisplayTime,
    frame: Frame<N>,
}

/// Time-to-frame renderer for one word layout
///
/// Each instance owns its own display cache; nothing is shared between
/// renderers.
#[derive(Debug, Clone)]
pub struct TimeRenderer<L, const N: usize> {
    layout: L,
    last: Option<DisplayState<N>>,
}

/// Renderer for the reference 8x8 face
pub type ReferenceRenderer = TimeRenderer<Reference8x8, REFERENCE_LEDS>;

impl Default for ReferenceRenderer {
    fn default() -> Self {
        Self::new(Reference8x8)
    }
}

impl<L: WordLayout<N>, const N: usize> TimeRenderer<L, N> {
    /// Create a renderer with an empty display cache
    pub const fn new(layout: L) -> Self {
        Self { layout, last: None }
    }

    /// Get the word layout
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Compute the frame for a 24-hour time
    ///
    /// Pure: does not read or update the display cache.
    ///
    /// # Arguments
    /// - `hour`: 0-23
    /// - `minute`: 0-59
    pub fn compute(&self, hour: u8, minute: u8) -> Result<Frame<N>, DomainError> {
        let time = DisplayTime::new(hour, minute)?;
        self.frame_for(time)
    }

    /// Compute the frame for an already rounded time
    pub fn frame_for(&self, time: DisplayTime) -> Result<Frame<N>, DomainError> {
        let phrase = Phrase::for_time(time)?;
        Ok(self.frame_for_phrase(&phrase))
    }

    /// Union of the LEDs of every word in the phrase
    pub fn frame_for_phrase(&self, phrase: &Phrase) -> Frame<N> {
        let mut frame = Frame::new();
        for word in phrase.words() {
            frame.light_all(self.layout.leds(word));
        }
        frame
    }

    /// Render a 24-hour time, tracking whether the display needs a repaint
    ///
    /// The frame is returned whether or not it changed. On error the cache
    /// is left untouched.
    pub fn render(&mut self, hour: u8, minute: u8) -> Result<Rendered<N>, DomainError> {
        let time = DisplayTime::new(hour, minute)?;

        if let Some(state) = self.last.filter(|state| state.time == time) {
            return Ok(Rendered {
                time,
                frame: state.frame,
                changed: false,
            });
        }

        let frame = self.frame_for(time)?;
        self.last = Some(DisplayState { time, frame });

        Ok(Rendered {
            time,
            frame,
            changed: true,
        })
    }

    /// Render a validated wall-clock time
    pub fn render_wall(&mut self, time: WallTime) -> Result<Rendered<N>, DomainError> {
        self.render(time.hour(), time.minute())
    }

    /// Forget the last displayed time so the next render reports a change
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Last successfully rendered time
    pub fn last_displayed(&self) -> Option<DisplayTime> {
        self.last.map(|state| state.time)
    }

    /// Frame of the last successful render
    pub fn last_frame(&self) -> Option<&Frame<N>> {
        self.last.as_ref().map(|state| &state.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Word;
    use proptest::prelude::*;

    const HOUR_WORDS: [Word; 12] = Word::HOURS;

    fn renderer() -> ReferenceRenderer {
        ReferenceRenderer::default()
    }

    fn lit(frame: &Frame<REFERENCE_LEDS>, word: Word) -> bool {
        let leds = Reference8x8.leds(word);
        let all = frame.contains_all(leds);
        // Reference words never share LEDs, so partial lighting is a bug
        assert_eq!(all, frame.contains_any(leds), "{:?} partially lit", word);
        all
    }

    /// Frame lighting exactly `words`
    fn expected(words: &[Word]) -> Frame<REFERENCE_LEDS> {
        let mut frame = Frame::new();
        frame.light_all(Reference8x8.leds(Word::ItIs));
        for &word in words {
            frame.light_all(Reference8x8.leds(word));
        }
        frame
    }

    #[test]
    fn test_half_past_two() {
        let frame = renderer().compute(2, 32).unwrap();
        assert_eq!(frame, expected(&[Word::Half, Word::Past, Word::Two]));
    }

    #[test]
    fn test_twenty_five_to_three() {
        let frame = renderer().compute(2, 33).unwrap();
        assert_eq!(
            frame,
            expected(&[Word::Twenty, Word::FiveMin, Word::To, Word::Three])
        );
    }

    #[test]
    fn test_quarter_to_three_afternoon() {
        let frame = renderer().compute(14, 47).unwrap();
        assert_eq!(frame, expected(&[Word::Quarter, Word::To, Word::Three]));
    }

    #[test]
    fn test_midnight_rollover() {
        let frame = renderer().compute(23, 58).unwrap();
        assert_eq!(frame, expected(&[Word::Twelve, Word::OClock]));
        assert!(!lit(&frame, Word::Past));
        assert!(!lit(&frame, Word::To));
    }

    #[test]
    fn test_rounds_down_to_oclock() {
        let frame = renderer().compute(0, 2).unwrap();
        assert_eq!(frame, expected(&[Word::Twelve, Word::OClock]));
    }

    #[test]
    fn test_ten_past_nine() {
        let frame = renderer().compute(9, 12).unwrap();
        assert_eq!(frame, expected(&[Word::TenMin, Word::Past, Word::Nine]));
    }

    #[test]
    fn test_noon_and_midnight() {
        let noon = renderer().compute(12, 0).unwrap();
        assert_eq!(noon, expected(&[Word::Twelve, Word::OClock]));

        let midnight = renderer().compute(0, 0).unwrap();
        assert_eq!(midnight, noon);
    }

    #[test]
    fn test_five_to_one_wraps_from_twelve() {
        let frame = renderer().compute(12, 55).unwrap();
        assert_eq!(frame, expected(&[Word::FiveMin, Word::To, Word::One]));
    }

    #[test]
    fn test_carry_across_hour() {
        let frame = renderer().compute(9, 58).unwrap();
        assert_eq!(frame, expected(&[Word::Ten, Word::OClock]));
    }

    #[test]
    fn test_minutes_word_never_lit() {
        let r = renderer();
        for hour in 0..24 {
            for minute in 0..60 {
                let frame = r.compute(hour, minute).unwrap();
                assert!(!lit(&frame, Word::Minutes));
            }
        }
    }

    #[test]
    fn test_word_rules_for_every_minute_of_day() {
        let r = renderer();
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let frame = r.compute(hour, minute).unwrap();
                let rounded = DisplayTime::new(hour, minute).unwrap().minute();

                assert!(lit(&frame, Word::ItIs), "{}:{}", hour, minute);
                assert_eq!(lit(&frame, Word::OClock), rounded == 0, "{}:{}", hour, minute);

                let past = lit(&frame, Word::Past);
                let to = lit(&frame, Word::To);
                if rounded == 0 {
                    assert!(!past && !to, "{}:{}", hour, minute);
                } else {
                    assert!(past ^ to, "{}:{}", hour, minute);
                }

                let hours_lit = HOUR_WORDS.iter().filter(|&&w| lit(&frame, w)).count();
                assert_eq!(hours_lit, 1, "{}:{}", hour, minute);
            }
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let r = renderer();
        assert_eq!(r.compute(24, 0), Err(DomainError::HourOutOfRange(24)));
        assert_eq!(r.compute(5, 60), Err(DomainError::MinuteOutOfRange(60)));
    }

    #[test]
    fn test_render_reports_change_once() {
        let mut r = renderer();

        let first = r.render(9, 10).unwrap();
        assert!(first.changed);

        // 9:11 and 9:12 still round to 9:10
        let second = r.render(9, 11).unwrap();
        assert!(!second.changed);
        assert_eq!(second.frame, first.frame);

        let third = r.render(9, 12).unwrap();
        assert!(!third.changed);

        // 9:13 rounds to 9:15
        let fourth = r.render(9, 13).unwrap();
        assert!(fourth.changed);
        assert_ne!(fourth.frame, first.frame);
        assert_eq!(r.last_displayed(), Some(fourth.time));
    }

    #[test]
    fn test_render_carry_matches_next_hour() {
        let mut r = renderer();
        let before = r.render(10, 58).unwrap();
        // 10:58 displays as 11:00, so 11:01 is not a change
        let after = r.render(11, 1).unwrap();
        assert!(before.changed);
        assert!(!after.changed);
        assert_eq!(before.time, after.time);
    }

    #[test]
    fn test_invalidate_forces_repaint() {
        let mut r = renderer();
        r.render(7, 30).unwrap();
        r.invalidate();
        assert_eq!(r.last_displayed(), None);
        assert!(r.last_frame().is_none());
        assert!(r.render(7, 30).unwrap().changed);
    }

    #[test]
    fn test_render_error_keeps_cache() {
        let mut r = renderer();
        let ok = r.render(3, 0).unwrap();
        assert!(r.render(3, 75).is_err());
        assert_eq!(r.last_displayed(), Some(ok.time));
        assert!(!r.render(3, 1).unwrap().changed);
    }

    #[test]
    fn test_independent_renderers() {
        let mut a = renderer();
        let mut b = renderer();
        assert!(a.render(6, 0).unwrap().changed);
        // b has its own cache
        assert!(b.render(6, 0).unwrap().changed);
        assert!(!a.render(6, 0).unwrap().changed);
    }

    #[test]
    fn test_render_wall() {
        let mut r = renderer();
        let time = WallTime::new(14, 47).unwrap();
        let rendered = r.render_wall(time).unwrap();
        assert_eq!(rendered.frame, r.compute(14, 47).unwrap());
    }

    proptest! {
        #[test]
        fn prop_compute_is_idempotent(hour in 0u8..24, minute in 0u8..60) {
            let r = renderer();
            prop_assert_eq!(r.compute(hour, minute), r.compute(hour, minute));
        }

        #[test]
        fn prop_render_matches_compute(hour in 0u8..24, minute in 0u8..60) {
            let mut r = renderer();
            let rendered = r.render(hour, minute).unwrap();
            prop_assert_eq!(rendered.frame, r.compute(hour, minute).unwrap());
            // Same input again is never a change
            prop_assert!(!r.render(hour, minute).unwrap().changed);
        }

        #[test]
        fn prop_same_rounded_time_same_frame(hour in 0u8..24, minute in 0u8..60) {
            let r = renderer();
            let time = DisplayTime::new(hour, minute).unwrap();
            prop_assert_eq!(
                r.compute(hour, minute).unwrap(),
                r.compute(time.hour(), time.minute()).unwrap()
            );
        }
    }
}
