//! Color ramp precomputation
//!
//! A gradient is described as alternating anchor colors and step counts:
//! `color(c0).steps(n0).color(c1).steps(n1).color(c2)`. Building it walks the
//! entries once and emits `n` linearly interpolated colors per `steps(n)`,
//! ending exactly on the next anchor. The source anchor itself is not emitted.

use crate::color::{self, blue, green, red};
use crate::error::{EmberError, Result};
use std::ops::Index;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientEntry {
    Color(u32),
    Steps(u32),
}

/// Collects anchors and step counts, then builds an immutable [`ColorRamp`].
#[derive(Clone, Debug, Default)]
pub struct GradientBuilder {
    entries: Vec<GradientEntry>,
}

impl GradientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: u32) -> Self {
        self.entries.push(GradientEntry::Color(color));
        self
    }

    pub fn steps(mut self, step_count: u32) -> Self {
        self.entries.push(GradientEntry::Steps(step_count));
        self
    }

    /// Reverse the entries added so far. Used for symmetric ramps.
    pub fn reverse(mut self) -> Self {
        self.entries.reverse();
        self
    }

    pub fn build(&self) -> Result<ColorRamp> {
        let total: usize = self
            .entries
            .iter()
            .map(|e| match e {
                GradientEntry::Steps(n) => *n as usize,
                GradientEntry::Color(_) => 0,
            })
            .sum();
        let mut result = Vec::with_capacity(total);
        let mut previous: Option<u32> = None;

        for (index, entry) in self.entries.iter().enumerate() {
            let step_count = match *entry {
                GradientEntry::Color(c) => {
                    previous = Some(c);
                    continue;
                }
                GradientEntry::Steps(n) => n,
            };
            if step_count < 1 {
                return Err(EmberError::InvalidStepCount(step_count));
            }
            let source = previous.ok_or(EmberError::MissingSourceColor { index })?;
            let target = self.entries[index + 1..]
                .iter()
                .find_map(|e| match e {
                    GradientEntry::Color(c) => Some(*c),
                    GradientEntry::Steps(_) => None,
                })
                .ok_or(EmberError::MissingTargetColor { index })?;

            let steps = step_count as f32;
            let mut r = red(source) as f32;
            let mut g = green(source) as f32;
            let mut b = blue(source) as f32;
            let dr = (red(target) as f32 - r) / steps;
            let dg = (green(target) as f32 - g) / steps;
            let db = (blue(target) as f32 - b) / steps;

            for step in 0..step_count {
                let c = if step + 1 == step_count {
                    color::pack_rgb(red(target) as i32, green(target) as i32, blue(target) as i32)
                } else {
                    r += dr;
                    g += dg;
                    b += db;
                    color::pack_rgb(r.round() as i32, g.round() as i32, b.round() as i32)
                };
                result.push(c);
                previous = Some(c);
            }
        }

        Ok(ColorRamp::new(result))
    }
}

/// The reference firework ramp: black at index 0 brightening through yellow
/// and red to white at the highest index, so a fresh particle (max age)
/// starts white and fades out as its age runs down.
pub fn fireworks_gradient() -> GradientBuilder {
    GradientBuilder::new()
        .color(color::WHITE)
        .steps(30)
        .color(color::RED)
        .steps(30)
        .color(color::YELLOW)
        .steps(50)
        .color(color::BLACK)
        .reverse()
}

/// Immutable, cheaply clonable sequence of packed colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRamp {
    colors: Arc<[u32]>,
}

impl ColorRamp {
    pub fn new(colors: Vec<u32>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.colors.get(index).copied()
    }

    /// Color at `index`, clamped into the ramp. An empty ramp yields black.
    pub fn at_clamped(&self, index: i32) -> u32 {
        if self.colors.is_empty() {
            return color::BLACK;
        }
        let max = self.colors.len() - 1;
        self.colors[(index.max(0) as usize).min(max)]
    }

    /// Highest valid index, used as the starting age of a fresh particle.
    pub fn max_index(&self) -> usize {
        self.colors.len().saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.colors.iter().copied()
    }
}

impl Index<usize> for ColorRamp {
    type Output = u32;
    fn index(&self, index: usize) -> &u32 {
        &self.colors[index]
    }
}
