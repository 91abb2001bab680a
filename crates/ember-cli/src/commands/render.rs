//! Run the simulation and write frames to PNG

use super::SimOptions;
use crate::raster::Framebuffer;
use anyhow::{bail, Context, Result};
use ember_particles::FireworksSimulation;
use std::path::{Path, PathBuf};

pub struct RenderArgs {
    pub sim: SimOptions,
    pub output: String,
    pub every: u64,
}

pub fn run(args: RenderArgs) -> Result<()> {
    if args.every == 0 {
        bail!("--every must be at least 1");
    }

    let config = args.sim.to_config()?;
    let mut sim =
        FireworksSimulation::new(&config).context("Failed to create simulation")?;
    let mut driver = args.sim.driver(&config);

    let out_dir = Path::new(&args.output);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory '{}'", args.output))?;

    let mut fb = Framebuffer::new(config.width, config.height);
    let mut written = 0usize;
    driver
        .run(&mut sim, args.sim.frames, |sim, clock| -> Result<()> {
            if clock.frame_count % args.every == 0 {
                fb.draw(sim.system());
                fb.save(&frame_path(out_dir, clock.frame_count))?;
                written += 1;
            }
            Ok(())
        })
        .context("Simulation failed")?;

    println!(
        "Wrote {} frame(s) ({}x{}) to {}",
        written,
        fb.width(),
        fb.height(),
        out_dir.display()
    );
    Ok(())
}

fn frame_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("frame_{:05}.png", frame))
}
