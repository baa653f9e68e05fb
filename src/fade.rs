use crate::{color::Color, config::Config, input};

use crossterm::cursor::MoveToColumn;
use crossterm::style::{self, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use thiserror::Error;

use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Debug, Error)]
pub enum FadeError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Fader {
    duration: Duration,
    fps: u32,
    animate: bool,
}

impl Fader {
    pub fn with_config(config: &Config) -> Self {
        Self {
            duration: config.duration,
            fps: config.fps,
            animate: config.animate,
        }
    }

    #[inline]
    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    #[inline]
    pub fn animated(&self) -> bool {
        self.animate
    }

    pub fn toggle_animate(&mut self) {
        self.animate = !self.animate;
    }

    /// Fades the displayed swatch from `start` to `end` over the configured
    /// duration, one interpolated color per frame.
    ///
    /// Returns early with the last rendered color if input arrives while
    /// animating, so the caller can handle the key and resume from there.
    pub fn fade<W: Write>(&self, out: &mut W, start: Color, end: Color) -> Result<Color, FadeError> {
        if !self.animate {
            return self.fade_no_animate(out, end);
        }

        let frame_ms = 1000. / self.fps as f64;
        let frame_time = Duration::from_millis(frame_ms.round() as u64);

        let mut current = start;
        self.render(out, current)?;
        let mut elapsed = Duration::from_secs(0);

        while elapsed < self.duration {
            let f_start = Instant::now();

            // interpolate the fade
            let t = elapsed.as_millis() as f64 / self.duration.as_millis() as f64;
            let next = start.step(end, t);

            // only redraw if the color will change
            if next != current {
                self.render(out, next)?;
                current = next;
            }

            // pause for the remainder of frame time to achieve target fps
            let dt = f_start.elapsed();
            if dt < frame_time {
                spin_sleep::sleep(frame_time - dt);
                // make sure stdin isn't waiting while animating
                if input::is_stdin_waiting(Duration::from_secs(0)) {
                    return Ok(current);
                }
            }

            elapsed += f_start.elapsed();
        }

        self.render(out, end)?;
        Ok(end)
    }

    fn fade_no_animate<W: Write>(&self, out: &mut W, end: Color) -> Result<Color, FadeError> {
        self.render(out, end)?;

        // make sure stdin isn't waiting while pausing
        input::is_stdin_waiting(self.duration);
        Ok(end)
    }

    fn render<W: Write>(&self, out: &mut W, color: Color) -> Result<(), FadeError> {
        crossterm::execute!(
            out,
            Clear(ClearType::CurrentLine),
            PrintStyledContent("        ".on(swatch_color(color))),
            Print(format!(" {color}")),
            MoveToColumn(0),
        )?;

        Ok(())
    }
}

/// Approximates a WRGB color for the terminal swatch by folding the white
/// channel into the three RGB channels.
fn swatch_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.red.saturating_add(color.white),
        g: color.green.saturating_add(color.white),
        b: color.blue.saturating_add(color.white),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            start: Color::default(),
            end: None,
            duration: Duration::from_secs(1),
            fps: 60,
            animate: true,
            cycle: false,
        }
    }

    #[test]
    fn fader_takes_settings_from_config() {
        let fader = Fader::with_config(&config());
        assert_eq!(*fader.duration(), Duration::from_secs(1));
        assert!(fader.animated());
    }

    #[test]
    fn toggle_animate_flips_state() {
        let mut fader = Fader::with_config(&config());
        fader.toggle_animate();
        assert!(!fader.animated());
        fader.toggle_animate();
        assert!(fader.animated());
    }

    #[test]
    fn swatch_folds_white_into_rgb() {
        let color = swatch_color(Color::new(0x10, 0x20, 0xf0, 0x20));
        assert_eq!(
            color,
            style::Color::Rgb {
                r: 0x30,
                g: 0x40,
                b: 0xff,
            }
        );
    }
}
