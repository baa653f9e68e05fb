mod cli;
mod color;
mod config;
mod fade;
mod input;
mod transition;

use color::Color;
use config::Config;
use fade::Fader;
use input::KeyCommand;

use anyhow::Result;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use std::io::stdout;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let matches = cli::build().get_matches();
    let config = Config::from(&matches);

    if let Err(e) = setup_logger(matches.get_flag("verbose")) {
        eprintln!("error: failed to initialize logging ({e})");
        return ExitCode::FAILURE;
    }

    let mut fader = Fader::with_config(&config);
    log::debug!(
        "fade duration: {:?}, fps: {}, animate: {}",
        fader.duration(),
        config.fps,
        fader.animated()
    );

    let mut stdout = stdout();
    execute!(
        stdout,
        cursor::Hide,
        EnterAlternateScreen,
        Clear(ClearType::All),
    )
    .expect("should be able to execute crossterm commands");
    enable_raw_mode().expect("should be able to start raw mode");

    let code = match run(&mut fader, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    };

    disable_raw_mode().expect("should be able to disable raw mode");
    execute!(stdout, cursor::Show, LeaveAlternateScreen)
        .expect("should be able to leave alternate screen");

    code
}

fn setup_logger(verbose: bool) -> Result<(), fern::InitError> {
    use fern::colors::{Color, ColoredLevelConfig};

    let colors = ColoredLevelConfig::new()
        .debug(Color::Cyan)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}\r",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn run(fader: &mut Fader, config: &Config) -> Result<()> {
    let mut stdout = stdout();
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        Print("Application started.\n".dim()),
        cursor::MoveToColumn(0),
        Print("Press ".dim()),
        Print("q".bold()),
        Print(" to quit, ".dim()),
        Print("n".bold()),
        Print(" for a new color, ".dim()),
        Print("p".bold()),
        Print(" to pause, ".dim()),
        Print("a".bold()),
        Print(" to toggle animation\n\n".dim()),
        cursor::MoveToColumn(0),
    )?;

    let rng = fastrand::Rng::new();
    let mut current = config.start;
    let mut target = config.end.unwrap_or_else(|| random_color(&rng));

    loop {
        if current != target {
            log::debug!(
                "fading from {current} to {target} (wrgb 0x{:08x})",
                u32::from(target)
            );
        }
        current = fader.fade(&mut stdout, current, target)?;

        if current == target && config.cycle {
            target = random_color(&rng);
        }

        match KeyCommand::read(&Duration::from_secs(0))? {
            KeyCommand::Quit => return Ok(()),
            KeyCommand::ToggleAnimate => fader.toggle_animate(),
            KeyCommand::NextTarget => target = random_color(&rng),
            KeyCommand::Pause => {
                log::debug!("paused at {current}");
                input::debounce()?;
                loop {
                    match KeyCommand::read(&Duration::from_millis(100))? {
                        KeyCommand::Quit => return Ok(()),
                        KeyCommand::Pause => break,
                        _ => (),
                    }
                }
            }
            _ => (),
        }
    }
}

fn random_color(rng: &fastrand::Rng) -> Color {
    // random 24-bit RGB value, white stays off
    Color::from(rng.u32(..) & 0x00ff_ffff)
}
