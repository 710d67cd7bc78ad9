//! Command-line argument parsing.

use clap::Parser;

use crate::params::{PhyllotaxisConfig, Preset};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "phyllo-trail")]
#[command(about = "Headless audio-reactive phyllotaxis trail runner", long_about = None)]
pub struct Args {
    /// Preset: oscillate (default), sawtooth, oneshot, sunflower
    #[arg(long, value_name = "PRESET", default_value = "oscillate")]
    pub preset: String,

    /// Number of independent trails to animate
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub instances: usize,

    /// Frames to simulate
    #[arg(long, value_name = "N", default_value_t = 600)]
    pub frames: u32,

    /// Simulated frame rate
    #[arg(long, value_name = "FPS", default_value_t = 60.0)]
    pub fps: f32,

    /// Seed for the synthetic audio bands
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    pub seed: u32,

    /// Points kept per trail
    #[arg(long, value_name = "N", default_value_t = 240)]
    pub trail_length: usize,

    /// Angle increment offset between consecutive instances (degrees)
    #[arg(long, value_name = "DEGREES", default_value_t = 0.5)]
    pub angle_spread: f32,

    /// Log every boundary transition
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Parse the preset name into a base configuration
    pub fn parse_preset(&self) -> PhyllotaxisConfig {
        let preset = match self.preset.to_lowercase().as_str() {
            "oscillate" => Preset::Oscillate,
            "sawtooth" => Preset::Sawtooth,
            "oneshot" | "one-shot" => Preset::OneShot,
            "sunflower" => Preset::Sunflower,
            other => {
                log::warn!("unknown preset '{}', using oscillate", other);
                Preset::Oscillate
            }
        };
        log::info!("preset: {:?}", preset);
        preset.config()
    }

    /// Seconds per simulated frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1.0)
    }
}
