//! Print the firework color ramp

use anyhow::{bail, Result};
use ember_core::{fireworks_gradient, ColorRamp};

pub fn run(format: &str) -> Result<()> {
    let ramp = fireworks_gradient().build()?;
    match format {
        "text" => {
            println!("{} color(s), indexed by remaining age", ramp.len());
            for line in text_lines(&ramp) {
                println!("{}", line);
            }
        }
        "json" => println!("{}", serde_json::to_string_pretty(&hex_colors(&ramp))?),
        other => bail!("Unknown format '{}' (expected text or json)", other),
    }
    Ok(())
}

fn hex_colors(ramp: &ColorRamp) -> Vec<String> {
    ramp.iter().map(|c| format!("#{:08X}", c)).collect()
}

fn text_lines(ramp: &ColorRamp) -> Vec<String> {
    hex_colors(ramp)
        .into_iter()
        .enumerate()
        .map(|(i, hex)| format!("{:4}  {}", i, hex))
        .collect()
}
