//! CLI command implementations

pub mod ramp;
pub mod render;
pub mod run;

use anyhow::{Context, Result};
use clap::Args;
use ember_particles::SimulationConfig;
use ember_runtime::{FrameDriver, Pacing};

/// Simulation options shared by `run` and `render`
#[derive(Args, Debug, Clone, Default)]
pub struct SimOptions {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value = "600")]
    pub frames: u64,

    /// Pool capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Image file scanned into a burst shape (repeatable)
    #[arg(long = "shape")]
    pub shapes: Vec<String>,

    /// Seconds a shape takes to unfold
    #[arg(long)]
    pub shape_time: Option<f32>,

    /// Pace frames to wall-clock time instead of stepping as fast as possible
    #[arg(long)]
    pub realtime: bool,
}

impl SimOptions {
    /// Load the config file (if any) and apply command-line overrides
    pub fn to_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("Failed to load config '{}'", path))?,
            None => SimulationConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.fireworks.seed = seed;
        }
        if !self.shapes.is_empty() {
            config.shapes = self.shapes.clone();
        }
        if let Some(t) = self.shape_time {
            config.shape_time = t;
        }
        Ok(config)
    }

    pub fn driver(&self, config: &SimulationConfig) -> FrameDriver {
        let pacing = if self.realtime {
            Pacing::RealTime
        } else {
            Pacing::Fixed
        };
        FrameDriver::new(config.frame_seconds as f64, pacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = SimOptions::default().to_config().unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 10\nwidth = 300\n[fireworks]\nseed = 1").unwrap();

        let opts = SimOptions {
            config: Some(file.path().display().to_string()),
            capacity: Some(99),
            seed: Some(5),
            shapes: vec!["a.png".into()],
            ..Default::default()
        };
        let config = opts.to_config().unwrap();
        assert_eq!(config.capacity, 99);
        assert_eq!(config.width, 300);
        assert_eq!(config.fireworks.seed, 5);
        assert_eq!(config.shapes, vec!["a.png"]);
    }

    #[test]
    fn missing_config_file_has_context() {
        let opts = SimOptions {
            config: Some("/nope/ember.toml".into()),
            ..Default::default()
        };
        let err = opts.to_config().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn pacing_follows_realtime_flag() {
        let config = SimulationConfig::default();
        let opts = SimOptions {
            realtime: true,
            ..Default::default()
        };
        assert_eq!(opts.driver(&config).pacing, Pacing::RealTime);
        assert_eq!(SimOptions::default().driver(&config).pacing, Pacing::Fixed);
    }
}
