use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;

use worldmap::config::DEFAULT_SCALE;
use worldmap::{render_map, MapConfig, Projection};

/// Render a longitude/latitude point file as a braille world map
#[derive(Debug, Parser)]
#[command(name = "worldmap", version, about)]
struct Cli {
    /// World map path (`<longitude> <latitude>` per line, `#` comments)
    #[arg(short = 'w', long = "world", value_name = "path")]
    world_map: PathBuf,

    /// World map scale
    #[arg(short, long, value_name = "scale", default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    scale: f64,

    /// Projection method
    #[arg(short, long, value_name = "method", value_enum, default_value_t = Projection::Flat)]
    projection: Projection,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug details to stderr
    #[arg(long)]
    debug: bool,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so stdout only carries the map
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::default().add_directive(log_level.into()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("Parsed arguments: {:?}", cli);

    let config = MapConfig::new(&cli.world_map, cli.scale, cli.projection)?;
    let rendered = match render_map(&config) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Map rendering failed: {}", e);
            return Err(e)
                .with_context(|| format!("cannot render {}", config.world_map().display()));
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write map to stdout")?;

    Ok(())
}
