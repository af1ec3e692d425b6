//! LED frames
//!
//! A frame is the set of LED positions that should be lit. It carries no
//! color or brightness; those belong to the display.

use crate::layout::LedIndex;

/// Set of lit LED positions on an `N`-LED matrix
///
/// Two frames are equal exactly when they light the same positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame<const N: usize> {
    lit: [bool; N],
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Frame<N> {
    /// Create a blank frame (all LEDs off)
    pub const fn new() -> Self {
        Self { lit: [false; N] }
    }

    /// Number of LED positions in this frame
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Light a single LED
    ///
    /// Returns `false` if `index` is outside the matrix.
    pub fn light(&mut self, index: LedIndex) -> bool {
        match self.lit.get_mut(index as usize) {
            Some(slot) => {
                *slot = true;
                true
            }
            None => false,
        }
    }

    /// Light every LED in `leds`
    ///
    /// Out-of-range positions are skipped. Layouts are validated before
    /// use, so this only matters for unvalidated tables.
    pub fn light_all(&mut self, leds: &[LedIndex]) {
        for &index in leds {
            self.light(index);
        }
    }

    /// Check whether an LED is lit
    pub fn is_lit(&self, index: LedIndex) -> bool {
        self.lit.get(index as usize).copied().unwrap_or(false)
    }

    /// Check whether every LED in `leds` is lit
    pub fn contains_all(&self, leds: &[LedIndex]) -> bool {
        leds.iter().all(|&index| self.is_lit(index))
    }

    /// Check whether any LED in `leds` is lit
    pub fn contains_any(&self, leds: &[LedIndex]) -> bool {
        leds.iter().any(|&index| self.is_lit(index))
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&on| on).count()
    }

    /// True if no LED is lit
    pub fn is_blank(&self) -> bool {
        !self.lit.iter().any(|&on| on)
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.lit = [false; N];
    }

    /// Iterate lit positions in ascending order
    pub fn iter_lit(&self) -> impl Iterator<Item = LedIndex> + '_ {
        self.lit
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index as LedIndex)
    }

    /// Per-position on/off state, in LED order
    pub fn as_slice(&self) -> &[bool; N] {
        &self.lit
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for Frame<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame({}/{} lit)", self.lit_count(), N);
    }
}
