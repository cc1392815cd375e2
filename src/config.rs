//! Command-line configuration.
//!
//! Every flag has a default, so running with no arguments reproduces the
//! reference run: a 20-wide lattice, 32 ticks, ASCII frames on stdout and the
//! point cloud under `/tmp`.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::automaton::{
    create_lattice, seed_center, RuleMode, TickDriver, DEFAULT_COUPLING, DEFAULT_SEED,
};
use crate::error::LatticeResult;

/// Expansion/contraction automaton on a 3D integer lattice.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Side length of the cubic lattice (at least 4).
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    /// Coupling magnitude N; the band thresholds are N and 2N.
    #[arg(long, default_value_t = DEFAULT_COUPLING)]
    pub coupling: i32,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 32)]
    pub ticks: u64,

    /// Value placed at the center cell before the first tick.
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i32,

    /// Behaviour of the phase-dependent bands.
    #[arg(long, value_enum, default_value_t = RuleMode::Faithful)]
    pub rule: RuleMode,

    /// Glyph for cells below N in the ASCII frames.
    #[arg(long, default_value_t = ' ')]
    pub blank: char,

    /// Directory receiving pos0.obj and clr<frame>.obj.
    #[arg(long, default_value = "/tmp")]
    pub output_dir: PathBuf,

    /// Do not print ASCII frames.
    #[arg(long)]
    pub no_ascii: bool,

    /// Do not write point-cloud files.
    #[arg(long)]
    pub no_point_cloud: bool,

    /// Worker threads for the apply phase.
    #[arg(long, default_value_t = 1)]
    pub threads: usize,

    /// Log verbosity (logs go to stderr).
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

impl Config {
    /// Build a seeded driver from this configuration.
    pub fn build_driver(&self) -> LatticeResult<TickDriver> {
        let mut lattice = create_lattice(self.width, self.coupling)?;
        seed_center(&mut lattice, self.seed);
        TickDriver::new(lattice, self.rule, self.threads)
    }
}
