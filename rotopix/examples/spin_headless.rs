//! Spin an image through one full turn without a display.
//!
//! Usage: `cargo run --example spin_headless [image.ppm]`
//!
//! Without an argument a generated 64x48 gradient is used. Pass `-v` to
//! see per-frame logs.

use rotopix::anim::{
    AnimationConfig, CancellationToken, DisplaySurface, FixedRateScheduler, MemorySurface, Viewer,
};
use std::process::ExitCode;

const FRAMES_PER_TURN: u64 = 30;

fn gradient_ppm(width: u32, height: u32) -> Vec<u8> {
    let mut data = format!("P6\n{width} {height}\n255\n").into_bytes();
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 4) as u8, (y * 5) as u8, 128]);
        }
    }
    data
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let (name, bytes) = match args.iter().find(|a| *a != "-v") {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => (path.clone(), bytes),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "cannot read file");
                return ExitCode::FAILURE;
            }
        },
        None => ("gradient.ppm".to_string(), gradient_ppm(64, 48)),
    };

    let mut surface = MemorySurface::new(320, 240);
    let viewer = Viewer::new(AnimationConfig::default());
    let mut animator = match viewer.load(&mut surface, &name, &bytes) {
        Ok(animator) => animator,
        Err(e) => {
            tracing::error!(file = %name, error = %e, "cannot load image");
            return ExitCode::FAILURE;
        }
    };

    // Frame 0 plus one full turn
    let mut scheduler = match FixedRateScheduler::new(60.0) {
        Ok(s) => s.with_frame_limit(FRAMES_PER_TURN),
        Err(e) => {
            tracing::error!(error = %e, "invalid frame rate");
            return ExitCode::FAILURE;
        }
    };
    let token = CancellationToken::new();

    match animator.run(&mut scheduler, &mut surface, &token) {
        Ok(summary) => {
            println!(
                "{} frames on a {:?} surface, final angle {}",
                summary.frames,
                surface.size(),
                summary.final_theta
            );
            if let Some(readout) = surface.last_readout() {
                println!("{readout}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(file = %name, error = %e, "animation failed");
            ExitCode::FAILURE
        }
    }
}
