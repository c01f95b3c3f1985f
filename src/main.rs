//! Chaotic Maps entry point
//!
//! Runs one simulation and writes `x,y` lines to stdout for an external
//! plotter. Usage: `chaotic-maps [settings.json]`

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use chaotic_maps::{Settings, map_names};

fn main() -> ExitCode {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut simulator = match settings.build_simulator() {
        Ok(simulator) => simulator,
        Err(e) => {
            log::error!("{}", e);
            log::info!("Available maps: {}", map_names().collect::<Vec<_>>().join(", "));
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Simulating {} ({} iterations, multi-point: {})",
        settings.map,
        simulator.iter_n(),
        simulator.map().is_multi_point_sim()
    );
    let (xs, ys) = simulator.simulate();
    log::info!("Produced {} points", xs.len());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (x, y) in xs.iter().zip(&ys) {
        if writeln!(out, "{},{}", x, y).is_err() {
            // Downstream closed the pipe
            return ExitCode::SUCCESS;
        }
    }
    match out.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to write points: {}", e);
            ExitCode::FAILURE
        }
    }
}
