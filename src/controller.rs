//! Per-instance animation state machine.
//!
//! An [`AnimationController`] owns everything that changes frame to frame:
//! the spiral index, the iteration counter, the walking direction, the
//! audio-modulated scale and the lerp timer. A caller-owned scheduler drives
//! it with [`AnimationController::tick`] once per frame; instances share no
//! mutable state, so any number of them can run side by side.
//!
//! Lerp mode walks `start_index, start_index + step, ...` one segment per
//! timer wrap and applies the repeat/invert policy once the iteration count
//! leaves `(0, max_iteration)`. Direct mode jumps to a new point every frame
//! and never checks bounds.

use glam::{Vec2, Vec3};

use crate::audio::AudioSignalSource;
use crate::curve::{Curve, SharedCurve};
use crate::error::ConfigError;
use crate::interpolation::{audio_rate, InterpolationEngine};
use crate::modulation::ScaleModulator;
use crate::params::PhyllotaxisConfig;
use crate::phyllotaxis::generate;
use crate::sink::VisualSink;

/// Lifecycle of one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, waiting for [`AnimationController::activate`]
    Idle,

    /// Lerping between spiral points at an audio-driven rate
    Interpolating,

    /// Jumping to the next spiral point every frame
    Direct,

    /// Reached the iteration bound without repeat; position is frozen
    Stopped,
}

/// Mutable per-instance state
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub current_index: i64,

    /// Steps taken; counts down again while walking backwards
    pub current_iteration: i64,

    pub forward: bool,
    pub current_scale: f32,

    /// Last emitted position
    pub position: Vec2,
}

impl AnimationState {
    fn seed(config: &PhyllotaxisConfig) -> Self {
        Self {
            current_index: config.spiral.start_index,
            current_iteration: 0,
            forward: true,
            current_scale: config.spiral.base_scale,
            position: Vec2::ZERO,
        }
    }
}

/// Drives one marker along an audio-reactive phyllotaxis spiral
#[derive(Debug)]
pub struct AnimationController {
    config: PhyllotaxisConfig,
    phase: Phase,
    state: AnimationState,
    scale: ScaleModulator,
    lerp: InterpolationEngine,
    rate_curve: SharedCurve,
}

impl AnimationController {
    /// Validate `config` and build an idle controller
    pub fn new(config: PhyllotaxisConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.spiral.angle_increment_deg == 0.0 {
            log::warn!("angle increment is 0: every point lies on the +x axis");
        }
        if config.spiral.step_size == 0 {
            log::warn!("step size is 0: the spiral index never moves");
        }

        let scale = ScaleModulator::new(config.spiral.base_scale, &config.scale);
        let rate_curve = config
            .lerp
            .rate_curve
            .clone()
            .unwrap_or_else(|| Curve::Linear.shared());

        Ok(Self {
            state: AnimationState::seed(&config),
            phase: Phase::Idle,
            scale,
            lerp: InterpolationEngine::default(),
            rate_curve,
            config,
        })
    }

    /// Start (or restart) the animation from the configured start index
    ///
    /// Applies the trail color, emits the seed position and enters lerp or
    /// direct mode. Calling this on a stopped controller reactivates it.
    pub fn activate<S: VisualSink + ?Sized>(&mut self, sink: &mut S) {
        self.state = AnimationState::seed(&self.config);
        self.scale.reset();
        sink.configure(self.config.trail_color);

        let seed = generate(
            self.config.spiral.angle_increment_deg,
            self.state.current_scale,
            self.state.current_index,
        );
        self.state.position = seed;
        sink.emit(seed.extend(0.0));

        if self.config.lerp.enabled {
            // First segment starts and ends on the seed point
            self.lerp.reset(seed, seed);
            self.phase = Phase::Interpolating;
        } else {
            self.phase = Phase::Direct;
        }

        log::info!(
            "activated at index {} ({:?}, {:.2}° increment)",
            self.state.current_index,
            self.phase,
            self.config.spiral.angle_increment_deg
        );
    }

    /// Advance one frame of `dt` seconds
    ///
    /// Returns the emitted position, or `None` when idle or stopped (nothing
    /// is sent to `sink` then).
    pub fn tick<A, S>(&mut self, dt: f32, audio: &A, sink: &mut S) -> Option<Vec3>
    where
        A: AudioSignalSource + ?Sized,
        S: VisualSink + ?Sized,
    {
        let position = match self.phase {
            Phase::Idle | Phase::Stopped => return None,
            Phase::Interpolating => {
                self.update_scale(dt, audio);
                self.step_interpolating(dt, audio)
            }
            Phase::Direct => {
                self.update_scale(dt, audio);
                self.step_direct()
            }
        };

        self.state.position = position;
        let emitted = position.extend(0.0);
        sink.emit(emitted);
        Some(emitted)
    }

    fn update_scale<A: AudioSignalSource + ?Sized>(&mut self, dt: f32, audio: &A) {
        if self.config.scale.enabled {
            let amplitude = audio.band_amplitude(self.config.scale.audio_band);
            self.state.current_scale = self.scale.update(dt, amplitude);
        }
    }

    fn step_direct(&mut self) -> Vec2 {
        let position = generate(
            self.config.spiral.angle_increment_deg,
            self.state.current_scale,
            self.state.current_index,
        );
        // Unbounded in this mode, so wrap rather than overflow
        self.state.current_index = self
            .state
            .current_index
            .wrapping_add(self.config.spiral.step_size);
        self.state.current_iteration = self.state.current_iteration.wrapping_add(1);
        position
    }

    fn step_interpolating<A: AudioSignalSource + ?Sized>(&mut self, dt: f32, audio: &A) -> Vec2 {
        let amplitude = audio.band_amplitude(self.config.lerp.audio_band);
        let rate = audio_rate(
            self.config.lerp.speed_range,
            self.rate_curve.as_ref(),
            amplitude,
        );

        let (position, wrapped) = self.lerp.advance(dt, rate);
        // The next segment starts where this frame lands
        self.state.position = position;
        if wrapped {
            self.on_wrap();
        }
        position
    }

    fn on_wrap(&mut self) {
        let step = self.config.spiral.step_size;
        let max_iteration = self.config.spiral.max_iteration;

        let state = &mut self.state;
        if state.forward {
            state.current_index = state.current_index.wrapping_add(step);
            state.current_iteration += 1;
        } else {
            state.current_index = state.current_index.wrapping_sub(step);
            state.current_iteration -= 1;
        }

        if state.current_iteration > 0 && state.current_iteration < max_iteration {
            self.retarget();
            return;
        }

        match (self.config.lerp.repeat, self.config.lerp.invert) {
            (true, true) => {
                state.forward = !state.forward;
                log::debug!(
                    "boundary at iteration {}: reversing (forward={})",
                    state.current_iteration,
                    state.forward
                );
                self.retarget();
            }
            (true, false) => {
                state.current_index = self.config.spiral.start_index;
                state.current_iteration = 0;
                log::debug!("boundary reached: restarting from index {}", state.current_index);
                self.retarget();
            }
            (false, _) => {
                self.phase = Phase::Stopped;
                log::info!(
                    "stopped after {} iterations at index {}",
                    state.current_iteration,
                    state.current_index
                );
            }
        }
    }

    /// Aim the next segment from the current position to the current index
    fn retarget(&mut self) {
        let end = generate(
            self.config.spiral.angle_increment_deg,
            self.state.current_scale,
            self.state.current_index,
        );
        self.lerp.retarget(self.state.position, end);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Interpolating | Phase::Direct)
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Last emitted position (z = 0)
    pub fn position(&self) -> Vec3 {
        self.state.position.extend(0.0)
    }

    pub fn lerp_timer(&self) -> f32 {
        self.lerp.timer()
    }

    pub fn config(&self) -> &PhyllotaxisConfig {
        &self.config
    }
}
