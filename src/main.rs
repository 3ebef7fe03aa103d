//! Motion Statistics Engine replay tool.
//!
//! Replays a recorded sample log through a [`MotionSession`] and logs every
//! interval report and recognized gesture. For library use, see lib.rs.
//!
//! Usage:
//!   motion-stats samples.log
//!   motion-stats --config session.toml --records < samples.log

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use motion_stats::{replay, IntervalReport, MotionSession, Result, SessionConfig};

/// Replay accelerometer samples through the statistics engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every sample record as a JSON line on stdout
    #[arg(short, long)]
    records: bool,

    /// Sample log to replay (stdin when omitted)
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    let samples = match &args.input {
        Some(path) => replay::read_samples(BufReader::new(File::open(path)?))?,
        None => replay::read_samples(io::stdin().lock())?,
    };
    log::info!(
        "replaying {} samples, reporting every {}ms",
        samples.len(),
        config.report_interval_ms
    );

    let mut session = MotionSession::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for sample in &samples {
        let outcome = session.process_sample(sample);
        if args.records {
            writeln!(out, "{}", outcome.record.to_json()?)?;
        }
        if let Some(report) = outcome.report {
            print_report(&report);
        }
    }
    if let Some(report) = session.flush() {
        print_report(&report);
    }

    let gestures = session.gesture_counts();
    log::info!(
        "done: {} samples, {} reports, thrust={} parry={} slash={} crossings={:?}",
        session.total_samples(),
        session.reports_emitted(),
        gestures.thrust,
        gestures.parry,
        gestures.slash,
        session.crossing_counts()
    );
    Ok(())
}

fn print_report(report: &IntervalReport) {
    log::info!("--- {}..{}ms ---", report.start_ms, report.end_ms);
    log::info!("COUNT  X:{} Y:{} Z:{}", report.x.count, report.y.count, report.z.count);
    log::info!("MAX    X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.max, report.y.max, report.z.max);
    log::info!("MIN    X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.min, report.y.min, report.z.min);
    log::info!("MEAN   X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.mean, report.y.mean, report.z.mean);
    log::info!("MEDIAN X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.median, report.y.median, report.z.median);
    log::info!("STDEV  X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.stdev, report.y.stdev, report.z.stdev);
}
