//! Arena CLI
//!
//! Run a round-based tournament between player adapters and print the
//! leaderboard.

use std::path::Path;

use anyhow::Context;

use arena_runner::{
    contestant_from_descriptor, descriptor_from_spec, MemorySink, ResultSink, RoundOutcome,
    TournamentConfig, TournamentRunner,
};

fn print_usage() {
    println!("Engine Arena");
    println!();
    println!("Usage:");
    println!("  arena [OPTIONS] <player> <player> [player...]");
    println!();
    println!("Players:");
    println!("  random          - uniform random mover");
    println!("  capture         - prefers captures");
    println!("  greedy          - takes the highest-value capture");
    println!("  <kind>:<tag>    - tagged variant, e.g. greedy:v2");
    println!("  uci:<path>      - UCI engine subprocess");
    println!();
    println!("Options:");
    println!("  --rounds N       rounds to play (default 3)");
    println!("  --max-plies N    ply budget per game (default 200)");
    println!("  --move-time MS   per-move budget for UCI engines (default 500)");
    println!("  --name NAME      tournament name");
    println!("  --config PATH    TOML config file");
    println!("  --standings PATH save final standings as JSON");
    println!();
    println!("Examples:");
    println!("  arena --rounds 2 random capture greedy");
    println!("  arena uci:/usr/local/bin/stockfish greedy");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return Ok(());
    }

    let mut config = TournamentConfig::default();
    let mut standings_path: Option<String> = None;
    let mut specs: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--rounds" => {
                let value = iter.next().context("--rounds requires a value")?;
                config.rounds = value.parse().context("invalid --rounds value")?;
            }
            "--max-plies" => {
                let value = iter.next().context("--max-plies requires a value")?;
                config.max_plies = value.parse().context("invalid --max-plies value")?;
            }
            "--move-time" => {
                let value = iter.next().context("--move-time requires a value")?;
                config.move_time_ms = value.parse().context("invalid --move-time value")?;
            }
            "--name" => {
                config.name = iter.next().context("--name requires a value")?;
            }
            "--config" => {
                let value = iter.next().context("--config requires a value")?;
                config = TournamentConfig::load(Path::new(&value))?;
            }
            "--standings" => {
                standings_path = Some(iter.next().context("--standings requires a value")?);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(2);
            }
            spec => specs.push(spec.to_string()),
        }
    }

    let sink = MemorySink::new();
    for spec in &specs {
        sink.add_engine(descriptor_from_spec(spec)).await;
    }

    let mut roster = Vec::new();
    for descriptor in sink.get_all_engines().await? {
        roster.push(contestant_from_descriptor(&descriptor, config.move_time()).await?);
    }

    let mut runner = TournamentRunner::new(config, roster, sink)?;
    let mut report = runner.start().await?;
    loop {
        for warning in &report.warnings {
            eprintln!("Warning: {}", warning);
        }
        println!("=== Round {} ===", report.round);
        for game in &report.games {
            println!(
                "  {} vs {}: {} ({:?}, {} plies)",
                game.white.name,
                game.black.name,
                game.outcome.winner.result_token(),
                game.outcome.reason,
                game.moves.len()
            );
        }
        if let Some(bye) = report.bye {
            if let Some(standing) = runner.table().standing(&bye) {
                println!("  bye: {}", standing.name);
            }
        }
        if report.outcome == RoundOutcome::Completed {
            break;
        }
        report = runner.advance_round().await?;
    }

    print!("{}", runner.table().render());

    if let Some(path) = standings_path {
        if let Err(e) = runner.table().save(Path::new(&path)) {
            eprintln!("Warning: failed to save standings: {}", e);
        }
    }
    Ok(())
}
