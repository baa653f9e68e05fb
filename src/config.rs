use crate::color::Color;

use clap::ArgMatches;

use std::time::Duration;

pub struct Config {
    pub start: Color,
    pub end: Option<Color>,
    pub duration: Duration,
    pub fps: u32,
    pub animate: bool,
    pub cycle: bool,
}

impl From<&ArgMatches> for Config {
    fn from(value: &ArgMatches) -> Self {
        let start = value
            .get_one::<Color>("START")
            .copied()
            .expect("start color should be required by clap");
        let end = value.get_one::<Color>("END").copied();
        let duration = value
            .get_one::<Duration>("duration")
            .copied()
            .expect("duration should be required by clap");
        let fps = value
            .get_one::<u32>("fps")
            .copied()
            .expect("fps should be required by clap");

        Self {
            start,
            end,
            duration,
            fps,
            animate: !value.get_flag("no-animate"),
            cycle: value.get_flag("cycle"),
        }
    }
}
