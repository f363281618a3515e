//! Run configuration: command-line flags layered over an optional JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ds_engine::RawInput;
use ds_playback::PlaybackConfig;
use serde::Deserialize;

pub const DEFAULT_HEAD:     &str = "50";
pub const DEFAULT_REQUESTS: &str = "95,180,34,119,11,123,62,64";
pub const DEFAULT_SEED:     u64  = 42;
pub const DEFAULT_FRAME_MS: f64  = 16.0;

/// Which file backends to write into `--out`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    #[default]
    Both,
}

/// Disk scheduling replay: compute a SCAN / C-SCAN service order and animate it.
#[derive(Debug, Parser)]
#[command(name = "replay", version)]
pub struct Cli {
    /// Largest cylinder index (0 or non-numeric → 199)
    #[arg(long, env = "REPLAY_DISK_MAX", allow_hyphen_values = true)]
    pub disk_max: Option<String>,

    /// Initial head cylinder
    #[arg(long, allow_hyphen_values = true)]
    pub head: Option<String>,

    /// Initial sweep direction: 1 or -1
    #[arg(long, allow_hyphen_values = true)]
    pub direction: Option<String>,

    /// `scan` or `cscan`
    #[arg(long, env = "REPLAY_ALGORITHM")]
    pub algorithm: Option<String>,

    /// Comma-separated request cylinders
    #[arg(long)]
    pub requests: Option<String>,

    /// Generate this many random requests instead of `--requests`
    #[arg(long, conflicts_with = "requests")]
    pub random: Option<usize>,

    /// Seed for `--random`
    #[arg(long, env = "REPLAY_SEED")]
    pub seed: Option<u64>,

    /// Playback speed multiplier
    #[arg(long)]
    pub speed: Option<f64>,

    /// Interval between frames in milliseconds
    #[arg(long)]
    pub frame_ms: Option<f64>,

    /// Pace frames in wall-clock time instead of running headless
    #[arg(long)]
    pub realtime: bool,

    /// Directory for the trace and frame log
    #[arg(long, env = "REPLAY_OUT")]
    pub out: Option<PathBuf>,

    /// Output backends written into `--out`
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Replay a saved JSON trace instead of computing one
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// JSON file supplying any of the options above
    #[arg(long, env = "REPLAY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Options as they may appear in a `--config` file.
///
/// Field names match the long flags with `-` replaced by `_`.  A nested
/// `playback` object tunes segment pacing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayConfig {
    pub disk_max:  Option<String>,
    pub head:      Option<String>,
    pub direction: Option<String>,
    pub algorithm: Option<String>,
    pub requests:  Option<String>,
    pub random:    Option<usize>,
    pub seed:      Option<u64>,
    pub speed:     Option<f64>,
    pub frame_ms:  Option<f64>,
    pub realtime:  bool,
    pub out:       Option<PathBuf>,
    pub format:    Option<OutputFormat>,
    pub trace:     Option<PathBuf>,
    pub playback:  PlaybackConfig,
}

impl ReplayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Overlay `cli` on top of `self`: any flag given on the command line
    /// wins.
    pub fn merge(self, cli: Cli) -> Self {
        // An explicit request list on the command line cancels a file's
        // `random`, and vice versa.
        let (requests, random) = match (cli.requests, cli.random) {
            (None, None) => (self.requests, self.random),
            (requests, random) => (requests, random),
        };
        let mut playback = self.playback;
        if let Some(speed) = cli.speed.or(self.speed) {
            playback.speed = speed;
        }
        Self {
            disk_max:  cli.disk_max.or(self.disk_max),
            head:      cli.head.or(self.head),
            direction: cli.direction.or(self.direction),
            algorithm: cli.algorithm.or(self.algorithm),
            requests,
            random,
            seed:      cli.seed.or(self.seed),
            speed:     Some(playback.speed),
            frame_ms:  cli.frame_ms.or(self.frame_ms),
            realtime:  cli.realtime || self.realtime,
            out:       cli.out.or(self.out),
            format:    cli.format.or(self.format),
            trace:     cli.trace.or(self.trace),
            playback,
        }
    }

    /// The five simulation fields as raw text, defaults filled in.
    pub fn raw_input(&self) -> RawInput {
        RawInput {
            disk_max:   self.disk_max.clone().unwrap_or_default(),
            head_start: self.head.clone().unwrap_or_else(|| DEFAULT_HEAD.to_owned()),
            direction:  self.direction.clone().unwrap_or_default(),
            algorithm:  self.algorithm.clone().unwrap_or_else(|| "scan".to_owned()),
            requests:   self.requests.clone().unwrap_or_else(|| DEFAULT_REQUESTS.to_owned()),
        }
    }

    pub fn frame_ms(&self) -> f64 {
        match self.frame_ms {
            Some(ms) if ms.is_finite() && ms > 0.0 => ms,
            _ => DEFAULT_FRAME_MS,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
