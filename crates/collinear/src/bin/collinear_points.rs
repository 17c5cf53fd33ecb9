use std::process::ExitCode;

use collinear::{read_points_from_path, DetectorKind};
use log::{error, info};

const USAGE: &str = "usage: collinear_points <point file> [brute|fast]";

fn run(path: &str, kind: DetectorKind) -> collinear::Result<()> {
    let points = read_points_from_path(path)?;
    let segments = kind.detect(&points)?;
    for segment in &segments {
        println!("{}", segment);
    }
    info!(
        "{} search found {} segments among {} points",
        kind,
        segments.len(),
        points.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let kind = match args.next().map(|arg| arg.parse::<DetectorKind>()) {
        None => DetectorKind::default(),
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("unknown search: {}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(&path, kind) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}
