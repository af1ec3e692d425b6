//! Ambient light sensor
//!
//! An LDR divider on an ADC input, smoothed with a running mean so a
//! passing shadow does not change the brightness.

use heapless::Deque;
use wordclock_core::config::{LightSensorConfig, MAX_LIGHT_SAMPLES};
use wordclock_core::traits::{LightSensor, SensorError};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Running mean over the last `window` readings
///
/// `CAP` is the storage size; `window` may be smaller and is clamped to
/// `1..=CAP`.
#[derive(Debug, Clone)]
pub struct LightAverager<const CAP: usize> {
    samples: Deque<u16, CAP>,
    window: usize,
    sum: u32,
}

impl<const CAP: usize> LightAverager<CAP> {
    pub fn new(window: usize) -> Self {
        Self {
            samples: Deque::new(),
            window: window.clamp(1, CAP),
            sum: 0,
        }
    }

    /// Add a reading, dropping the oldest once the window is full
    pub fn push(&mut self, sample: u16) {
        if self.samples.len() >= self.window {
            if let Some(oldest) = self.samples.pop_front() {
                self.sum -= u32::from(oldest);
            }
        }
        // Window is at most CAP, so there is always room after the pop
        if self.samples.push_back(sample).is_ok() {
            self.sum += u32::from(sample);
        }
    }

    /// Mean of the readings in the window, if any
    pub fn average(&self) -> Option<u16> {
        let count = self.samples.len() as u32;
        if count == 0 {
            return None;
        }
        Some((self.sum / count) as u16)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.sum = 0;
    }
}

/// Light sensor that averages raw ADC readings
pub struct AveragingLightSensor<ADC> {
    adc: ADC,
    averager: LightAverager<MAX_LIGHT_SAMPLES>,
}

impl<ADC: AdcReader> AveragingLightSensor<ADC> {
    /// Create a new sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel wired to the divider
    /// - `samples`: readings averaged per level (clamped to 1-32)
    pub fn new(adc: ADC, samples: u8) -> Self {
        Self {
            adc,
            averager: LightAverager::new(usize::from(samples)),
        }
    }

    pub fn from_config(adc: ADC, config: &LightSensorConfig) -> Self {
        Self::new(adc, config.samples)
    }

    /// Take one reading into the window
    ///
    /// A failed conversion is not recorded.
    pub fn sample(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        self.averager.push(raw);
        Ok(raw)
    }

    /// Averaged level without taking a new reading
    pub fn level(&self) -> Result<u16, SensorError> {
        self.averager.average().ok_or(SensorError::NoSamples)
    }

    /// Get access to the averaging window
    pub fn averager(&self) -> &LightAverager<MAX_LIGHT_SAMPLES> {
        &self.averager
    }
}

impl<ADC: AdcReader> LightSensor for AveragingLightSensor<ADC> {
    fn read_level(&mut self) -> Result<u16, SensorError> {
        self.sample()?;
        self.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Replays a fixed list of readings; `None` is a failed conversion
    struct ScriptedAdc {
        readings: Vec<Option<u16>>,
        next: usize,
    }

    impl ScriptedAdc {
        fn new(readings: &[Option<u16>]) -> Self {
            Self {
                readings: readings.to_vec(),
                next: 0,
            }
        }
    }

    impl AdcReader for ScriptedAdc {
        fn read(&mut self) -> Result<u16, ()> {
            let reading = self.readings.get(self.next).copied().flatten();
            self.next += 1;
            reading.ok_or(())
        }
    }

    #[test]
    fn test_averager_window() {
        let mut avg = LightAverager::<8>::new(3);
        assert_eq!(avg.average(), None);

        avg.push(100);
        avg.push(200);
        assert_eq!(avg.average(), Some(150));

        avg.push(300);
        avg.push(400);
        // Oldest (100) dropped
        assert_eq!(avg.len(), 3);
        assert_eq!(avg.average(), Some(300));
    }

    #[test]
    fn test_averager_window_clamped() {
        assert_eq!(LightAverager::<4>::new(0).window(), 1);
        assert_eq!(LightAverager::<4>::new(10).window(), 4);
    }

    #[test]
    fn test_averager_clear() {
        let mut avg = LightAverager::<4>::new(4);
        avg.push(10);
        avg.clear();
        assert!(avg.is_empty());
        assert_eq!(avg.average(), None);
    }

    #[test]
    fn test_read_level_averages() {
        let adc = ScriptedAdc::new(&[Some(1000), Some(2000), Some(3000)]);
        let mut sensor = AveragingLightSensor::new(adc, 10);

        assert_eq!(sensor.read_level(), Ok(1000));
        assert_eq!(sensor.read_level(), Ok(1500));
        assert_eq!(sensor.read_level(), Ok(2000));
    }

    #[test]
    fn test_conversion_error() {
        let adc = ScriptedAdc::new(&[None, Some(800), None]);
        let mut sensor = AveragingLightSensor::new(adc, 10);

        assert_eq!(sensor.read_level(), Err(SensorError::ConversionError));
        assert_eq!(sensor.level(), Err(SensorError::NoSamples));

        assert_eq!(sensor.read_level(), Ok(800));
        // Failed read keeps the previous average
        assert_eq!(sensor.read_level(), Err(SensorError::ConversionError));
        assert_eq!(sensor.level(), Ok(800));
        assert_eq!(sensor.averager().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_average_within_sample_range(samples in proptest::collection::vec(0u16..=4095, 1..64), window in 1usize..=32) {
            let mut avg = LightAverager::<32>::new(window);
            for &s in &samples {
                avg.push(s);
            }
            let kept = &samples[samples.len().saturating_sub(window)..];
            let min = *kept.iter().min().unwrap();
            let max = *kept.iter().max().unwrap();
            let mean = avg.average().unwrap();
            prop_assert!(mean >= min && mean <= max);
        }
    }
}
