//! Shared boundary types for the fireworks show.
//!
//! This module defines the two key data contracts:
//! - Engine → Renderer (in-memory): `Firework`s carrying their `Spark`s
//! - Renderer → Surface: `Rgba` fill colors, possibly out of range

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// A configured color, either by name or as explicit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    Navy,
    Midnight,
    Gray,
    White,
}

impl Color {
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Named(n) => match n {
                NamedColor::Black => Rgb::new(0, 0, 0),
                NamedColor::Navy => Rgb::new(0, 0, 128),
                NamedColor::Midnight => Rgb::new(25, 25, 112),
                NamedColor::Gray => Rgb::new(128, 128, 128),
                NamedColor::White => Rgb::new(255, 255, 255),
            },
            Color::Rgb { r, g, b } => Rgb::new(r, g, b),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Black)
    }
}

/// A resolved pixel color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Sum of channels, used to pick the most visible pixel of a block.
    pub fn brightness(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

/// A fill color as the renderer produces it.
///
/// Channels are not range-checked: trail fades go negative and flight
/// colors can exceed 255. Surfaces clamp when they rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f32,
}

impl Rgba {
    /// Missing channels default to 0, alpha to opaque.
    pub fn from_channels(channels: &[i32]) -> Self {
        let at = |i: usize| channels.get(i).copied().unwrap_or(0);
        Rgba {
            r: at(0),
            g: at(1),
            b: at(2),
            a: 1.0,
        }
    }

    pub fn clamped(self) -> Rgb {
        let c = |v: i32| v.clamp(0, 255) as u8;
        Rgb::new(c(self.r), c(self.g), c(self.b))
    }

    pub fn alpha(self) -> f32 {
        if self.a.is_nan() { 0.0 } else { self.a.clamp(0.0, 1.0) }
    }
}

// ---------------------------------------------------------------------------
// Particles
// ---------------------------------------------------------------------------

/// One explosion trail. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spark {
    pub vx: f64,
    pub vy: f64,
    pub weight: f64,
    /// `[red, green, blue]`, each 0 or 1.
    pub channels: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Fly,
    Explode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firework {
    pub x: u32,
    pub y: f64,
    pub age: u32,
    pub phase: Phase,
    pub sparks: Vec<Spark>,
}

impl Firework {
    pub fn is_exploded(&self) -> bool {
        self.phase == Phase::Explode
    }
}
