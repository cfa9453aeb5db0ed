use std::{fs, path::Path, process};

use anyhow::{Context, Result, bail};
use log::info;

use fireworks::{config::Config, engine::Show, player::Player, trace};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const PLAY_USAGE: &str = "fireworks play [config.json]";
const TRACE_USAGE: &str = "fireworks trace <ticks> <output.json> [config.json]";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("play") => {
            let config = load_config(args.next().as_deref())?;
            play(config)
        }
        Some("trace") => {
            let ticks = args.next().context(TRACE_USAGE)?;
            let ticks: usize = ticks
                .parse()
                .with_context(|| format!("Invalid tick count {ticks:?}"))?;
            let output_path = args.next().context(TRACE_USAGE)?;
            let config = load_config(args.next().as_deref())?;
            record(config, ticks, &output_path)
        }
        _ => bail!("fireworks — terminal fireworks show\n\nUsage:\n  {PLAY_USAGE}\n  {TRACE_USAGE}"),
    }
}

/// An explicit path must load cleanly; otherwise the user config applies.
fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load_from(Path::new(path)).with_context(|| format!("Failed to load {path}"))
        }
        None => Ok(Config::load()),
    }
}

fn play(config: Config) -> Result<()> {
    info!(
        "playing {} fireworks x {} sparks on {}x{} at {} fps",
        config.max_fireworks, config.max_sparks, config.width, config.height, config.fps,
    );
    let mut player = Player::new(config);
    player.play()
}

fn record(config: Config, ticks: usize, output_path: &str) -> Result<()> {
    let mut rng = config.rng();
    let show = Show::new(
        config.width,
        config.height,
        config.max_fireworks,
        config.max_sparks,
        &mut rng,
    );
    let (trace, _) = trace::record(show, ticks, &mut rng);

    let output_json = serde_json::to_string_pretty(&trace)?;
    fs::write(output_path, &output_json)
        .with_context(|| format!("Failed to write {output_path}"))?;

    let ops: usize = trace.ticks.iter().map(|t| t.ops.len()).sum();
    eprintln!(
        "Traced {} ticks ({} paint ops) -> {}",
        trace.ticks.len(),
        ops,
        output_path,
    );

    Ok(())
}
