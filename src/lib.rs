//! Phyllo-trail library - audio-reactive phyllotaxis trail animation

pub mod audio;
pub mod cli;
pub mod controller;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod modulation;
pub mod params;
pub mod phyllotaxis;
pub mod sink;

pub use controller::{AnimationController, AnimationState, Phase};
pub use error::ConfigError;
pub use params::PhyllotaxisConfig;
