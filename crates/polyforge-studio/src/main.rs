mod app;
mod gallery;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use polyforge_engine::device::GpuInit;
use polyforge_engine::logging::{init_logging, LoggingConfig};
use polyforge_engine::window::{Runtime, RuntimeConfig};

use app::{FailureSlot, GalleryApp};

/// Cycles through the polyforge primitive gallery.
///
/// Space shows the next scene, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "polyforge-studio", version, about)]
struct Args {
    /// Seconds each scene stays on screen; 0 disables auto-advance.
    #[arg(long, value_parser = parse_interval, default_value = "3")]
    interval: Duration,

    /// Scene to start with (sphere, cube, cylinder, comparison, pyramid,
    /// prism, solids, triangle, flat).
    #[arg(long)]
    scene: Option<String>,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,

    /// Window size in logical pixels.
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    size: (u32, u32),
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected seconds, got '{s}'"))?;
    Duration::try_from_secs_f32(secs).map_err(|err| format!("invalid interval '{s}': {err}"))
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("invalid dimension '{v}'"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let scenes = gallery::scenes();
    let start = match &args.scene {
        Some(name) => gallery::find(&scenes, name)
            .with_context(|| format!("unknown scene '{name}'"))?,
        None => 0,
    };

    let interval = (!args.interval.is_zero()).then_some(args.interval);
    let failure = FailureSlot::default();

    let config = RuntimeConfig {
        title: "polyforge".to_string(),
        initial_size: LogicalSize::new(args.size.0 as f64, args.size.1 as f64),
        ..Default::default()
    };

    Runtime::run(
        config,
        GpuInit::default(),
        GalleryApp::new(scenes, start, interval, failure.clone()),
    )?;

    if let Some(err) = failure.take() {
        return Err(err).context("renderer initialization failed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parses_width_and_height() {
        assert_eq!(parse_size("1024x768"), Ok((1024, 768)));
        assert_eq!(parse_size("640X480"), Ok((640, 480)));
        assert!(parse_size("1024").is_err());
        assert!(parse_size("0x10").is_err());
    }

    #[test]
    fn interval_rejects_values_outside_duration_range() {
        assert_eq!(parse_interval("0"), Ok(Duration::ZERO));
        assert_eq!(parse_interval("1.5"), Ok(Duration::from_millis(1500)));
        assert!(parse_interval("inf").is_err());
        assert!(parse_interval("NaN").is_err());
        assert!(parse_interval("-1").is_err());
        assert!(parse_interval("1e30").is_err());
        assert!(parse_interval("soon").is_err());
    }

    #[test]
    fn bad_interval_is_a_usage_error() {
        let err = Args::try_parse_from(["polyforge-studio", "--interval", "inf"])
            .expect_err("inf must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn args_have_gallery_defaults() {
        let args = Args::parse_from(["polyforge-studio"]);
        assert_eq!(args.interval, Duration::from_secs(3));
        assert_eq!(args.size, (800, 600));
        assert!(args.scene.is_none());
    }
}
