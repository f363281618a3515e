//! replay — command-line front end for the disksched simulator.
//!
//! Computes a SCAN or C-SCAN service order (or reloads one from a saved JSON
//! trace), prints the movement summary, then drives the playback controller
//! to completion.  With `--out`, the trace and the frame log are written to
//! disk.
//!
//! ```text
//! replay --head 50 --algorithm cscan --requests 95,180,34,119,11,123,62,64
//! replay --random 20 --seed 7 --out ./run --format json
//! replay --trace ./run/trace.json --realtime --speed 4
//! ```
//!
//! Logging is controlled by `RUST_LOG` (default `replay=info,ds_playback=info`).

mod config;
mod status;

use std::fs::{self, File};
use std::io::BufReader;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use ds_core::{Simulation, WorkloadRng, format_number};
use ds_engine::{SimulationBuilder, coerce_disk_max};
use ds_output::{
    CsvWriter, JsonWriter, OutputWriter, PlaybackOutputObserver, TraceDocument, read_trace_json,
};
use ds_playback::{
    Clock, FrameQueue, ManualClock, PlaybackController, SystemClock, drive,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Cli, OutputFormat, ReplayConfig};
use status::StatusLine;

type Writers = Vec<Box<dyn OutputWriter>>;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replay=info,ds_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => ReplayConfig::load(path)?,
        None => ReplayConfig::default(),
    };
    let config = file_config.merge(cli);

    let sim = simulation(&config)?;
    println!("{}", sim.summary());
    println!();

    if sim.is_empty() {
        println!("{}", no_requests_message(&sim));
        return Ok(());
    }

    let mut writers = open_writers(&config)?;
    writers
        .write_trace(&TraceDocument::new(&sim, Utc::now()))
        .context("writing trace")?;

    let sim = Arc::new(sim);
    let frame_ms = config.frame_ms();
    let (status, mut output) = if config.realtime {
        play(&config, SystemClock::new(), sim, writers, |ms| {
            std::thread::sleep(Duration::from_secs_f64(ms / 1_000.0));
        })
    } else {
        let clock = ManualClock::new(0.0);
        let ticker = clock.clone();
        play(&config, clock, sim, writers, move |ms| ticker.advance(ms))
    };

    let frames = output.frames_seen();
    output.finish().context("finishing output")?;

    println!(
        "Played {} frames at {} ms/frame (speed ×{})",
        status.frames(),
        format_number(frame_ms),
        format_number(config.playback.speed),
    );
    if let Some(out) = &config.out {
        println!("Wrote trace and {frames} frame rows to {}", out.display());
    }
    Ok(())
}

fn no_requests_message(sim: &Simulation) -> String {
    format!("No valid requests (0..{}): enter comma separated integers.", sim.disk_max())
}

/// Compute the simulation from the configured inputs, or reload `--trace`.
fn simulation(config: &ReplayConfig) -> Result<Simulation> {
    if let Some(path) = &config.trace {
        let file = File::open(path).with_context(|| format!("opening trace {}", path.display()))?;
        let doc = read_trace_json(BufReader::new(file))
            .with_context(|| format!("reading trace {}", path.display()))?;
        info!(path = %path.display(), created_at = %doc.meta.created_at, "trace loaded");
        return doc.into_simulation().context("validating trace");
    }

    let raw = config.raw_input();
    let builder = SimulationBuilder::from_raw(&raw);
    let sim = match config.random {
        Some(count) => {
            let disk_max = coerce_disk_max(&raw.disk_max);
            let requests = WorkloadRng::new(config.seed()).requests(count, disk_max);
            info!(count, seed = config.seed(), "random workload");
            builder.cylinders(&requests).build()
        }
        None => builder.build(),
    };
    Ok(sim)
}

fn open_writers(config: &ReplayConfig) -> Result<Writers> {
    let Some(dir) = &config.out else {
        return Ok(Vec::new());
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut writers: Writers = Vec::new();
    let format = config.format();
    if matches!(format, OutputFormat::Csv | OutputFormat::Both) {
        writers.push(Box::new(CsvWriter::new(dir)?));
    }
    if matches!(format, OutputFormat::Json | OutputFormat::Both) {
        writers.push(Box::new(JsonWriter::new(dir)?));
    }
    info!(dir = %dir.display(), ?format, "writing output");
    Ok(writers)
}

/// Load `sim`, press play, and deliver frames until playback finishes.
fn play<C: Clock>(
    config: &ReplayConfig,
    clock: C,
    sim: Arc<Simulation>,
    writers: Writers,
    wait: impl FnMut(f64),
) -> (StatusLine, PlaybackOutputObserver<Writers>) {
    let observer = (StatusLine::default(), PlaybackOutputObserver::new(writers));
    let mut controller =
        PlaybackController::new(config.playback.clone(), clock, FrameQueue::new(), observer);
    controller.load(sim);
    controller.play();

    let delivered = drive(&mut controller, config.frame_ms(), wait);
    if controller.is_playing() {
        warn!(delivered, "playback stopped before the last step");
    }

    let (status, mut output) = controller.into_observer();
    if let Some(e) = output.take_error() {
        warn!(error = %e, "frame log incomplete");
    }
    (status, output)
}
