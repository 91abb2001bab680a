//! Ember CLI - Command-line driver for the Ember particle engine

mod commands;
mod raster;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ramp, render, run, SimOptions};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Fixed-capacity firework particle simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and report statistics
    Run {
        #[command(flatten)]
        sim: SimOptions,

        /// Log statistics every N frames (0 disables)
        #[arg(long, default_value = "60")]
        report_every: u64,

        /// Summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the simulation and write PNG frames
    Render {
        #[command(flatten)]
        sim: SimOptions,

        /// Output directory for frame images
        #[arg(short, long, default_value = "frames")]
        output: String,

        /// Write one image every N frames
        #[arg(long, default_value = "10")]
        every: u64,
    },

    /// Print the firework color ramp
    Ramp {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            sim,
            report_every,
            format,
        } => run::run(run::RunArgs {
            sim,
            report_every,
            format,
        }),
        Commands::Render { sim, output, every } => {
            render::run(render::RenderArgs { sim, output, every })
        }
        Commands::Ramp { format } => ramp::run(&format),
    }
}
