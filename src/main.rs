#![warn(clippy::all)]

use sparse_life::{
    generations, parse_iterations, pattern_names, render_generations, resolve_seed, Config,
    LifeError, NiceInt, RANDOM,
};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

fn usage() -> String {
    let names = pattern_names().chain([RANDOM]).collect::<Vec<_>>().join("|");
    format!("Usage: sparse_life <{}|FILE.rle> <iterations> [seed]", names)
}

fn parse_seed(arg: Option<&String>) -> Result<Option<u64>, LifeError> {
    arg.map(|s| s.parse().map_err(|_| LifeError::InvalidSeed(s.clone())))
        .transpose()
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sparse_life=warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (Some(pattern), Some(iterations)) = (args.get(1), args.get(2)) else {
        eprintln!("{}", usage());
        return Ok(ExitCode::from(2));
    };

    let parsed = parse_iterations(iterations).and_then(|iterations| {
        let seed = resolve_seed(pattern, parse_seed(args.get(3))?)?;
        Ok((iterations, seed))
    });
    let (iterations, seed) = match parsed {
        Ok(x) => x,
        Err(e) => {
            eprintln!("error: {}\n{}", e, usage());
            return Ok(ExitCode::from(2));
        }
    };
    info!(pattern = %pattern, iterations, population = seed.population(), "starting");

    let config = Config::from_env();
    let mut stdout = std::io::stdout().lock();
    for (generation, state) in generations(seed)
        .take(iterations.saturating_add(1))
        .enumerate()
    {
        debug!(
            generation,
            population = %NiceInt::from_usize(state.population()),
            "rendering"
        );
        write!(stdout, "{}", render_generations([&state], &config))?;
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
