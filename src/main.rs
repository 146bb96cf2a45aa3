//! Futbolito headless runner
//!
//! Stands in for the host UI: feeds a fixed tilt into the fixed-rate driver
//! and logs goals as they happen.

use std::path::PathBuf;

use clap::Parser;
use futbolito::platform::ScriptedTilt;
use futbolito::sim::{TiltSample, Viewport};
use futbolito::{Game, Settings};

const DEFAULT_WIDTH: f32 = 1080.0;
const DEFAULT_HEIGHT: f32 = 1920.0;
const DEFAULT_TICKS: u32 = 600;

/// Run a tilt-controlled soccer match without a screen
#[derive(Parser, Debug)]
#[command(name = "futbolito")]
struct Args {
    /// Field width
    #[arg(value_parser = parse_dimension, requires = "height")]
    width: Option<f32>,
    /// Field height
    #[arg(value_parser = parse_dimension)]
    height: Option<f32>,
    /// Number of ticks to simulate
    #[arg(default_value_t = DEFAULT_TICKS)]
    ticks: u32,
    /// Constant tilt as AX,AY
    #[arg(long, value_parser = parse_tilt, default_value = "1,0", allow_hyphen_values = true)]
    tilt: TiltSample,
    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }
}

fn parse_number(s: &str) -> Result<f32, String> {
    s.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("bad number '{}'", s))
}

fn parse_dimension(s: &str) -> Result<f32, String> {
    let v = parse_number(s)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("dimension must be positive, got {}", v))
    }
}

fn parse_tilt(s: &str) -> Result<TiltSample, String> {
    let (ax, ay) = s
        .split_once(',')
        .ok_or_else(|| format!("bad tilt '{}', expected AX,AY", s))?;
    Ok(TiltSample::new(parse_number(ax)?, parse_number(ay)?))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args = Args::parse();
    let viewport = args.viewport();

    let settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    log::info!(
        "Futbolito starting: {}x{} field, {} ticks, tilt ({}, {})",
        viewport.width,
        viewport.height,
        args.ticks,
        args.tilt.ax,
        args.tilt.ay
    );

    let period = settings.tick_period_ms;
    let mut game = Game::new(settings, ScriptedTilt::constant(args.tilt));
    game.resize(viewport);

    let mut goals = 0;
    for _ in 0..args.ticks {
        goals += game.update(period).len();
    }

    let snap = game.snapshot();
    log::info!(
        "Finished after {} ticks: {} goals, score {} - {}",
        snap.time_ticks,
        goals,
        snap.score.team1(),
        snap.score.team2()
    );

    if args.json {
        match serde_json::to_string_pretty(&snap) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("futbolito: could not encode snapshot: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "ball at ({:.2}, {:.2}), score {} - {}",
            snap.ball_position.x,
            snap.ball_position.y,
            snap.score.team1(),
            snap.score.team2()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on wasm; the host page drives `Game` directly
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("futbolito").chain(list.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.viewport(), Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(args.ticks, DEFAULT_TICKS);
        assert_eq!(args.tilt, TiltSample::new(1.0, 0.0));
        assert!(args.settings.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_parse_full() {
        let args = parse(&["1000", "2000", "60", "--tilt", "1,-0.5", "--json"]).unwrap();
        assert_eq!(args.viewport(), Viewport::new(1000.0, 2000.0));
        assert_eq!(args.ticks, 60);
        assert_eq!(args.tilt, TiltSample::new(1.0, -0.5));
        assert!(args.json);
    }

    #[test]
    fn test_parse_negative_tilt_and_settings() {
        let args = parse(&["--tilt", "-2,3", "--settings", "tuning.json"]).unwrap();
        assert_eq!(args.tilt, TiltSample::new(-2.0, 3.0));
        assert_eq!(args.settings, Some(PathBuf::from("tuning.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["1000"]).is_err());
        assert!(parse(&["0", "100"]).is_err());
        assert!(parse(&["--tilt", "1"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["100", "nan"]).is_err());
        assert!(parse(&["100", "200", "many"]).is_err());
    }
}
