use crate::transition;

use thiserror::Error;

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("expected 6 (RGB) or 8 (RGBW) hex digits, got {0}")]
    InvalidLength(usize),
    #[error("colors must be ascii hex digits")]
    NonAscii,
    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] ParseIntError),
}

/// A WRGB color with one byte per channel.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Returns the color at `progress` (between `[0, 1]`) of a fade from
    /// `self` to `target`.
    ///
    /// Each channel fades over its own step range: the channel is shifted
    /// to a zero-based range, progress is scaled onto `[0, max - min]`,
    /// and the interpolated offset is added back onto the channel minimum.
    pub fn step(&self, target: Self, progress: f64) -> Self {
        Self {
            red: step_channel(self.red, target.red, progress),
            green: step_channel(self.green, target.green, progress),
            blue: step_channel(self.blue, target.blue, progress),
            white: step_channel(self.white, target.white, progress),
        }
    }
}

fn step_channel(start: u8, end: u8, progress: f64) -> u8 {
    let lower = start.min(end) as f64;
    let (start, end) = (start as f64 - lower, end as f64 - lower);
    let step = progress.clamp(0., 1.) * start.max(end);
    let value = lower + transition::interpolate(step, start, end);

    transition::constrain(value, 0., 255.).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.white == 0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.white
            )
        }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self {
            white: (value >> 24 & 0xff) as u8,
            red: (value >> 16 & 0xff) as u8,
            green: (value >> 8 & 0xff) as u8,
            blue: (value & 0xff) as u8,
        }
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        (value.white as u32) << 24
            | (value.red as u32) << 16
            | (value.green as u32) << 8
            | value.blue as u32
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_ascii() {
            return Err(ColorError::NonAscii);
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidLength(digits.len()));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
            white: if digits.len() == 8 { channel(6)? } else { 0 },
        })
    }
}
