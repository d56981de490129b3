// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - run a full container-to-series conversion.

use std::path::PathBuf;

use clap::Args;

use crate::common::{format_base_time, Result};
use h5series::container::BackendRegistry;
use h5series::pipeline::{Config, Converter};
use h5series::sink::DirSinkProvider;

/// Convert a container file to time-ordered series output.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// Input container file
    #[arg(short = 'i', long = "infile", value_name = "FILE")]
    infile: PathBuf,

    /// Output root directory
    #[arg(short = 'o', long = "outdir", value_name = "DIR", default_value = "CTdata")]
    outdir: PathBuf,

    /// Output time range committed per batch, in seconds
    #[arg(short = 'f', long = "flush", value_name = "SECONDS", default_value_t = 1.0)]
    flush: f64,

    /// Offset added to every source time, in epoch seconds
    #[arg(
        short = 'b',
        long = "basetime",
        value_name = "SECONDS",
        default_value_t = h5series::pipeline::config::DEFAULT_BASE_TIME
    )]
    basetime: f64,

    /// Encrypt output with the given password
    #[arg(short = 'e', long = "encrypt", value_name = "PASSWORD")]
    encrypt: Option<String>,

    /// Disable output block compression
    #[arg(long = "nozip")]
    nozip: bool,

    /// Double-stage compression
    #[arg(long = "gzip")]
    gzip: bool,

    /// Batched/packed block mode
    #[arg(long = "pack")]
    pack: bool,

    /// High resolution (microsecond) output time
    #[arg(long = "hirestime")]
    hirestime: bool,

    /// Write attributes to files instead of sink channels
    #[arg(long = "attrtofile")]
    attrtofile: bool,
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        let mut config = Config::new(&self.infile);
        config.output_root = self.outdir;
        config.flush_interval = self.flush;
        config.base_time = self.basetime;
        config.password = self.encrypt;
        config.zip = !self.nozip;
        config.gzip = self.gzip;
        config.pack = self.pack;
        config.hi_res_time = self.hirestime;
        config.attributes_to_file = self.attrtofile;

        println!("Converting container:");
        println!("  Input:     {}", self.infile.display());
        println!("  Output:    {}", config.output_root.display());
        println!(
            "  Base time: {} ({})",
            config.base_time,
            format_base_time(config.base_time)
        );

        let container = BackendRegistry::with_defaults().open(&self.infile)?;
        let converter = Converter::new(config);
        let stats = converter.run(container.as_ref(), &DirSinkProvider)?;

        println!("  Datasets:  {} converted, {} skipped", stats.datasets_converted, stats.datasets_skipped);
        println!("  Samples:   {}", stats.samples_decoded);
        println!("  Times:     {}", stats.times_emitted);
        println!("  Records:   {}", stats.records_emitted);
        if stats.invalid_times_skipped > 0 {
            println!("  Dropped:   {} samples with invalid timestamps", stats.invalid_times_skipped);
        }
        if stats.metadata_failures > 0 {
            println!("  Warning:   {} attribute deliveries failed", stats.metadata_failures);
        }
        println!("  Conversion complete!");
        Ok(())
    }
}
