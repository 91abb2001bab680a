//! Simulation configuration (parsed from TOML)

use ember_core::Result;
use std::path::Path;

/// Tunables of the firework behavior
#[derive(Debug, Clone, PartialEq)]
pub struct FireworksConfig {
    /// Attempt a spawn batch every N particle ticks (counted across frames)
    pub spawn_interval: u64,
    /// Upper bound on batches in flight
    pub max_batches_in_flight: u32,
    /// Seconds after which one in-flight batch is retired
    pub throttle_slice: f32,
    /// Children per batch when no custom shapes are loaded
    pub batch_size: usize,
    /// Dead slots reseeded by `init`
    pub init_limit: usize,
    /// Vertical acceleration applied to every spawned particle
    pub gravity: f32,
    /// Half-extent of the initial position jitter
    pub spawn_radius: f32,
    /// Half-extent of the initial velocity jitter
    pub launch_speed: f32,
    pub seed: u32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 10_000,
            max_batches_in_flight: 10,
            throttle_slice: 0.15,
            batch_size: 51,
            init_limit: 10_000,
            gravity: -9.81 * 5.0,
            spawn_radius: 10.0,
            launch_speed: 100.0,
            seed: 0xDEAD_BEEF,
        }
    }
}

impl FireworksConfig {
    /// Parse from a `[fireworks]` TOML table; missing keys keep their defaults
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("spawn_interval") {
            let interval = toml_count(v, "spawn_interval", config.spawn_interval as usize);
            if interval == 0 {
                log::warn!("spawn_interval must be at least 1, using 1");
            }
            config.spawn_interval = interval.max(1) as u64;
        }
        if let Some(v) = table.get("max_batches_in_flight") {
            config.max_batches_in_flight =
                toml_count(v, "max_batches_in_flight", config.max_batches_in_flight as usize) as u32;
        }
        if let Some(v) = table.get("throttle_slice") {
            let slice = toml_f32(v, config.throttle_slice);
            if slice > 0.0 {
                config.throttle_slice = slice;
            } else {
                log::warn!("throttle_slice must be positive, keeping {}", config.throttle_slice);
            }
        }
        if let Some(v) = table.get("batch_size") {
            config.batch_size = toml_count(v, "batch_size", config.batch_size);
        }
        if let Some(v) = table.get("init_limit") {
            config.init_limit = toml_count(v, "init_limit", config.init_limit);
        }
        if let Some(v) = table.get("gravity") {
            config.gravity = toml_f32(v, config.gravity);
        }
        if let Some(v) = table.get("spawn_radius") {
            config.spawn_radius = toml_f32(v, config.spawn_radius);
        }
        if let Some(v) = table.get("launch_speed") {
            config.launch_speed = toml_f32(v, config.launch_speed);
        }
        if let Some(v) = table.get("seed") {
            config.seed = v.as_integer().map(|i| i as u32).unwrap_or(config.seed);
        }

        config
    }
}

/// Pool size, viewport and frame pacing, plus the firework tunables
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub capacity: usize,
    pub width: u32,
    pub height: u32,
    pub frame_seconds: f32,
    /// Image files scanned into spawn shapes
    pub shapes: Vec<String>,
    /// Seconds a shape takes to fully unfold
    pub shape_time: f32,
    pub fireworks: FireworksConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: 500_000,
            width: 640,
            height: 480,
            frame_seconds: 0.016,
            shapes: Vec::new(),
            shape_time: 1.5,
            fireworks: FireworksConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("capacity") {
            config.capacity = toml_count(v, "capacity", config.capacity);
        }
        if let Some(v) = table.get("width") {
            config.width = toml_dimension(v, "width", config.width);
        }
        if let Some(v) = table.get("height") {
            config.height = toml_dimension(v, "height", config.height);
        }
        if let Some(v) = table.get("frame_seconds") {
            config.frame_seconds = toml_f32(v, config.frame_seconds);
        }
        if let Some(v) = table.get("shape_time") {
            let t = toml_f32(v, config.shape_time);
            if t > 0.0 {
                config.shape_time = t;
            } else {
                log::warn!("shape_time must be positive, keeping {}", config.shape_time);
            }
        }
        if let Some(arr) = table.get("shapes").and_then(|v| v.as_array()) {
            config.shapes = arr
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
        }
        if let Some(fireworks) = table.get("fireworks").and_then(|v| v.as_table()) {
            config.fireworks = FireworksConfig::from_toml(fireworks);
        }

        config
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let table: toml::value::Table = toml::from_str(&text)?;
        Ok(Self::from_toml(&table))
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_count(v: &toml::Value, key: &str, default: usize) -> usize {
    match v.as_integer() {
        Some(i) if i >= 0 => i as usize,
        Some(i) => {
            log::warn!("{key} must not be negative (got {i}), using 0");
            0
        }
        None => default,
    }
}

fn toml_dimension(v: &toml::Value, key: &str, default: u32) -> u32 {
    let n = toml_count(v, key, default as usize);
    if n == 0 {
        log::warn!("{key} must be at least 1 pixel, using 1");
    }
    n.clamp(1, u32::MAX as usize) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_sane() {
        let config = SimulationConfig::default();
        assert!(config.capacity > 0);
        assert!(config.fireworks.spawn_interval > 0);
        assert!(config.fireworks.gravity < 0.0);
        assert!(config.shapes.is_empty());
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
capacity = 2000
width = 800
shapes = ["heart.png", "star.png"]

[fireworks]
spawn_interval = 50
batch_size = 20
gravity = 0
seed = 7
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = SimulationConfig::from_toml(&table);
        assert_eq!(config.capacity, 2000);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert_eq!(config.shapes, vec!["heart.png", "star.png"]);
        assert_eq!(config.fireworks.spawn_interval, 50);
        assert_eq!(config.fireworks.batch_size, 20);
        assert_eq!(config.fireworks.seed, 7);
        assert!(config.fireworks.gravity.abs() < 1e-6);
        assert_eq!(config.fireworks.init_limit, 10_000);
    }

    #[test]
    fn toml_integer_float_coercion() {
        let table: toml::value::Table = toml::from_str("frame_seconds = 1\nshape_time = 2").unwrap();
        let config = SimulationConfig::from_toml(&table);
        assert!((config.frame_seconds - 1.0).abs() < 1e-6);
        assert!((config.shape_time - 2.0).abs() < 1e-6);
    }

    #[test]
    fn negative_counts_fall_back_to_zero() {
        let table: toml::value::Table = toml::from_str("batch_size = -3\nspawn_interval = 0").unwrap();
        let config = FireworksConfig::from_toml(&table);
        assert_eq!(config.batch_size, 0);
        assert_eq!(config.spawn_interval, 1);
    }

    #[test]
    fn invalid_viewport_and_throttle_are_clamped() {
        let table: toml::value::Table =
            toml::from_str("width = 0\nheight = -5\n[fireworks]\nthrottle_slice = 0").unwrap();
        let config = SimulationConfig::from_toml(&table);
        assert_eq!(config.width, 1);
        assert_eq!(config.height, 1);
        assert!((config.fireworks.throttle_slice - 0.15).abs() < 1e-6);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 42\n[fireworks]\nlaunch_speed = 5.5").unwrap();
        let config = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 42);
        assert!((config.fireworks.launch_speed - 5.5).abs() < 1e-6);
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = [").unwrap();
        assert!(SimulationConfig::load(file.path()).is_err());
    }
}
