use std::time::Duration;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tileswap_solver::progress::Reporter;
use tileswap_solver::{solve, Configuration};

fn cli() -> Command {
    Command::new("tileswap-solver")
        .about("Shortest move sequence for the 4x4 red/blue/white tile puzzle")
        .arg(
            Arg::new("start")
                .value_name("START")
                .help("Start configuration file")
                .default_value("start.input"),
        )
        .arg(
            Arg::new("target")
                .value_name("TARGET")
                .help("Target configuration file")
                .default_value("target.input"),
        )
        .arg(
            Arg::new("steps")
                .long("steps")
                .action(ArgAction::SetTrue)
                .help("Print the grid after every move of the solution"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("SECS")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("5")
                .help("Seconds between progress reports"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Do not report progress"),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    let load = |name: &str| -> Result<Configuration> {
        // Both arguments carry defaults.
        let path = matches
            .get_one::<String>(name)
            .with_context(|| format!("Missing {name} argument"))?;
        Configuration::load(path).with_context(|| format!("Failed to load the {name} configuration"))
    };
    let start = load("start")?;
    let target = load("target")?;

    run(&matches, &start, &target)
}

fn run(matches: &ArgMatches, start: &Configuration, target: &Configuration) -> Result<()> {
    let reporter = (!matches.get_flag("quiet")).then(|| {
        let secs = matches.get_one::<u64>("interval").copied().unwrap_or(5);
        Reporter::spawn(Duration::from_secs(secs))
    });

    let result = solve::bfs(start, target, |visited| {
        if let Some(reporter) = &reporter {
            reporter.record(visited);
        }
    });
    if let Some(reporter) = reporter {
        reporter.finish();
    }

    let Some(path) = result.path else {
        println!("No path found. {} configurations traversed", result.visited);
        return Ok(());
    };
    println!("{path}");

    if matches.get_flag("steps") {
        let mut state = start.clone();
        println!("\n{state}White at {}\n", state.white());
        for (&dir, i) in path.iter().zip(1..) {
            state.go(dir).context("Solution contains an illegal move")?;
            println!("{i}: {dir}\n{state}White at {}\n", state.white());
        }
    }
    Ok(())
}
