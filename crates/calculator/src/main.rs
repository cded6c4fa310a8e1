use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use iterlab::{DISPLAY_PRECISION, Method, Session, calculate};
use iterlab_core::Termination;
use iterlab_export::Mode;
use tracing_subscriber::EnvFilter;

/// Root finding and optimization with iteration tables.
#[derive(Debug, Parser)]
#[command(name = "iterlab", version)]
struct Cli {
    /// Session file (TOML); flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Method: root, optimal, gss, or fixed.
    #[arg(short, long)]
    method: Option<Method>,

    /// Function of x, e.g. "x^2 - 4".
    #[arg(short, long)]
    function: Option<String>,

    /// Left bound, or the initial guess for fixed-point iteration.
    #[arg(short, allow_negative_numbers = true)]
    a: Option<f64>,

    /// Right bound.
    #[arg(short, allow_negative_numbers = true)]
    b: Option<f64>,

    #[arg(short, long = "tol")]
    tolerance: Option<f64>,

    #[arg(long)]
    max_iters: Option<usize>,

    /// Stop on the first within-tolerance iteration.
    #[arg(long, conflicts_with = "hysteresis")]
    first_within: bool,

    /// Stop after this many within-tolerance iterations.
    #[arg(long)]
    hysteresis: Option<usize>,

    /// Write the iteration table to this CSV file.
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Export derived columns as spreadsheet formulas.
    #[arg(long, requires = "export")]
    formulas: bool,

    /// Number of iteration rows to print.
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Increase log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn session(&self) -> Result<Session> {
        let mut session = match &self.config {
            Some(path) => Session::load(path)?,
            None => Session::default(),
        };

        if let Some(method) = self.method {
            session.method = method;
        }
        if let Some(function) = &self.function {
            session.function.clone_from(function);
        }
        if let Some(a) = self.a {
            session.a = a;
        }
        if let Some(b) = self.b {
            session.b = b;
        }
        if let Some(tolerance) = self.tolerance {
            session.tolerance = tolerance;
        }
        if let Some(max_iters) = self.max_iters {
            session.max_iters = max_iters;
        }
        if self.first_within {
            session.termination = Termination::FirstWithin;
        }
        if let Some(required) = self.hysteresis {
            session.termination = Termination::Hysteresis { required };
        }

        Ok(session)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = cli.session()?;
    let report = calculate(&session).context("calculation failed")?;

    println!("{report}");
    println!();
    print!(
        "{}",
        report
            .sheet(Mode::Values)
            .table(Some(cli.rows))
            .with_precision(DISPLAY_PRECISION + 2)
    );

    if let Some(path) = &cli.export {
        let mode = if cli.formulas { Mode::Formulas } else { Mode::Values };
        let csv = report.sheet(mode).to_csv_string()?;
        fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Exported {} rows to {}", report.iters(), path.display());
    }

    Ok(())
}
