use crate::color::Color;

use anyhow::{anyhow, ensure, Result};
use clap::builder::ValueParser;
use clap::{arg, command, Arg, ArgAction, Command};

use std::str::FromStr;
use std::time::Duration;

const COLOR_LONG_HELP: &str = "Colors are specified as hex digits, with an \
optional leading '#'.

Six digits (RRGGBB) set the red, green, and blue channels. Eight digits \
(RRGGBBWW) additionally set the white channel of an RGBW strip; the white \
channel is blended into the preview swatch.";

const DURATION_LONG_HELP: &str = "Specify how long a fade from the start \
color to the end color should take. If not specified, defaults to 1 second.

A single number is parsed as SECONDS per fade. Numbers can be specified as \
integers (e.g., 42) or floating point numbers (e.g., 0.42). A single number \
argument must be a positive value.";

const FPS_LONG_HELP: &str = "Number of fade steps per second. If not \
specified, defaults to 60.

Note that steps are specified per SECOND, not per FADE. Thus a duration of \
10s at 60fps would result in 600 interpolated colors per fade. Similarly, a \
duration of 0.5s at 60fps would generate 30 colors per fade. In general, \
shorter durations require a higher fps value to make fades appear smooth.";

const NO_ANIMATE_LONG_HELP: &str = "Do not animate color changes. Instead, \
'place' the end color immediately.

This is mostly useful together with '--cycle' to preview a sequence of \
random colors without the fades between them.";

const CYCLE_LONG_HELP: &str = "Keep fading after the end color is reached, \
picking a new random end color for each fade.

If END is not specified on the command line, the first fade already targets \
a random color; this flag simply never stops.";

pub fn build() -> Command {
    command!()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_help("Use '--help' for detailed information")
        .after_long_help("Use '-h' for brief information")
        .arg(
            arg!(<START> "Start color as hex digits (see '--help' for formatting)")
                .long_help(COLOR_LONG_HELP)
                .value_parser(ValueParser::new(Color::from_str)),
        )
        .arg(
            arg!([END] "End color as hex digits (default: random)")
                .long_help(COLOR_LONG_HELP)
                .value_parser(ValueParser::new(Color::from_str)),
        )
        .next_help_heading("Fade Options")
        .arg(
            arg!(-d --duration <DURATION> "Duration of a single fade (default: 1s)")
                .long_help(DURATION_LONG_HELP)
                .default_value("1")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_duration)),
        )
        .arg(
            arg!(-f --fps <FPS> "Number of fade steps per second (default: 60)")
                .long_help(FPS_LONG_HELP)
                .default_value("60")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_fps))
                .conflicts_with("no-animate"),
        )
        .arg(
            arg!(-a --"no-animate" "Do not animate color changes")
                .long_help(NO_ANIMATE_LONG_HELP),
        )
        .arg(
            arg!(-c --cycle "Keep fading to new random colors").long_help(CYCLE_LONG_HELP),
        )
        .next_help_heading("Options")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug information while running")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-h --help "Print help information and quit").action(ArgAction::Help))
        .arg(arg!(-V --version "Print version information and quit").action(ArgAction::Version))
}

pub fn parse_duration(s: &str) -> Result<Duration> {
    if let Ok(result) = parse_sec_u64(s) {
        return Ok(result);
    }

    if let Ok(result) = parse_sec_f64(s) {
        return Ok(result);
    }

    Err(anyhow!("could not parse input as a duration"))
}

fn parse_sec_u64(s: &str) -> Result<Duration> {
    match s.parse::<u64>() {
        Ok(value) => {
            ensure!(value > 0, "duration must be a positive number");
            Ok(Duration::from_secs(value))
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn parse_sec_f64(s: &str) -> Result<Duration> {
    match s.parse::<f64>() {
        Ok(value) => {
            ensure!(value > 0., "duration must be a positive number");
            let ms = value * 1000.;
            Ok(Duration::from_millis(ms.round() as u64))
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn parse_fps(s: &str) -> Result<u32> {
    // parse first as i64 so we can report better error messages
    match s.parse::<i64>() {
        Ok(value) => {
            ensure!(value > 0, "fps must be a positive number");
            ensure!(
                value <= u32::MAX as i64,
                format!("fps must be between 1 and {}", u32::MAX)
            );
            Ok(value as u32)
        }
        Err(e) => Err(anyhow!(e)),
    }
}
