//! Audio-band input for audio-reactive modulation.
//!
//! Spectrum analysis lives outside this crate. Anything that can answer
//! "how loud is band N right now" in \[0, 1\] plugs in through
//! [`AudioSignalSource`].

mod noise_bands;

pub use noise_bands::NoiseBands;

/// Number of bands carried by [`AudioBands`]
pub const BAND_COUNT: usize = 8;

/// Per-frame normalized band amplitudes, read fresh each tick
pub trait AudioSignalSource {
    /// Amplitude of `band` in \[0, 1\]
    fn band_amplitude(&self, band: usize) -> f32;
}

impl<F> AudioSignalSource for F
where
    F: Fn(usize) -> f32,
{
    fn band_amplitude(&self, band: usize) -> f32 {
        self(band)
    }
}

/// Snapshot of normalized frequency band energies
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioBands {
    pub bands: [f32; BAND_COUNT],
}

impl AudioBands {
    /// Same amplitude in every band
    pub fn uniform(amplitude: f32) -> Self {
        Self {
            bands: [amplitude.clamp(0.0, 1.0); BAND_COUNT],
        }
    }

    /// Set one band, clamped to \[0, 1\]; out-of-range bands are ignored
    pub fn set(&mut self, band: usize, amplitude: f32) {
        if let Some(slot) = self.bands.get_mut(band) {
            *slot = amplitude.clamp(0.0, 1.0);
        }
    }
}

impl AudioSignalSource for AudioBands {
    fn band_amplitude(&self, band: usize) -> f32 {
        self.bands.get(band).copied().unwrap_or(0.0)
    }
}
