//! Phyllo-trail - headless runner
//!
//! Animates several independently configured trails against a synthetic
//! audio spectrum and reports where each one ended up.

use anyhow::Context;
use clap::Parser;

use phyllo_trail::audio::{NoiseBands, BAND_COUNT};
use phyllo_trail::cli::Args;
use phyllo_trail::sink::{TrailColor, TrailRecorder};
use phyllo_trail::AnimationController;

/// Noise-space travel per second for the fake spectrum
const AUDIO_RATE_HZ: f64 = 0.8;

const PALETTE: [TrailColor; 4] = [
    TrailColor::new(1.0, 0.8, 0.3, 1.0),
    TrailColor::new(0.3, 0.9, 0.4, 1.0),
    TrailColor::new(0.3, 0.5, 0.9, 1.0),
    TrailColor::new(0.9, 0.3, 0.6, 1.0),
];

/// One animated trail and the sink it draws into
struct Instance {
    controller: AnimationController,
    trail: TrailRecorder,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let base = args.parse_preset();
    let mut instances = (0..args.instances)
        .map(|i| {
            let mut config = base.clone();
            config.spiral.angle_increment_deg += i as f32 * args.angle_spread;
            config.lerp.audio_band = i % BAND_COUNT;
            config.scale.audio_band = (i + 1) % BAND_COUNT;
            config.trail_color = PALETTE[i % PALETTE.len()];
            let controller = AnimationController::new(config)
                .with_context(|| format!("instance {i} has an invalid configuration"))?;
            Ok::<_, anyhow::Error>(Instance {
                controller,
                trail: TrailRecorder::new(args.trail_length),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for instance in &mut instances {
        instance.controller.activate(&mut instance.trail);
    }

    let dt = args.frame_dt();
    let mut audio = NoiseBands::new(args.seed, AUDIO_RATE_HZ);
    for _ in 0..args.frames {
        audio.advance(dt);
        for instance in &mut instances {
            instance.controller.tick(dt, &audio, &mut instance.trail);
        }
    }

    println!(
        "\n{} frames @ {:.0} fps ({:.1}s simulated)",
        args.frames,
        args.fps,
        args.frames as f32 * dt
    );
    for (i, instance) in instances.iter().enumerate() {
        let state = instance.controller.state();
        let pos = instance.controller.position();
        println!(
            "#{i}: {:?} iteration={} index={} forward={} scale={:.3} pos=({:.3}, {:.3}) trail={}",
            instance.controller.phase(),
            state.current_iteration,
            state.current_index,
            state.forward,
            state.current_scale,
            pos.x,
            pos.y,
            instance.trail.len()
        );
    }

    Ok(())
}
