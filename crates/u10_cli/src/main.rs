//! U10 roster CLI
//!
//! Loads a JSON array of player records, admits them in file order and
//! prints the team, its starting lineup and the bench.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use u10_core::{
    render_list, Admission, NewPlayer, Removal, RosterConfig, RosterError, RosterManager,
};

#[derive(Parser)]
#[command(name = "u10_cli")]
#[command(about = "Manage a U10 soccer roster", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Admit players from a JSON file and print the team
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// JSON array of player records
    #[arg(long)]
    players: PathBuf,

    /// Date ages are computed on (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Seed for random jersey numbers; lowest free number when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Jersey number to remove after loading (repeatable)
    #[arg(long = "remove", allow_negative_numbers = true)]
    remove: Vec<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show(args) => print!("{}", run(&args)?),
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn load_players(path: &Path) -> Result<Vec<NewPlayer>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid player list in {}", path.display()))
}

fn run(args: &ShowArgs) -> Result<String> {
    let records = load_players(&args.players)?;
    debug!("Loaded {} player records", records.len());

    let mut config = match args.seed {
        Some(seed) => RosterConfig::seeded(seed),
        None => RosterConfig::default(),
    };
    if let Some(date) = args.as_of {
        config = config.with_evaluation_date(date);
    }
    let mut team = RosterManager::with_config(config)?;

    let mut out = String::new();
    for record in &records {
        match team.admit(record) {
            Ok(Admission::Admitted { slot, evicted }) => {
                info!("{} {} wears {}", record.first_name, record.last_name, slot);
                if let Some(gone) = evicted {
                    writeln!(
                        out,
                        "Evicted: {}, {}, Jersey Number: {}",
                        gone.player.first_name(),
                        gone.player.last_name(),
                        gone.slot
                    )?;
                }
            }
            Ok(Admission::NotAdmitted) => {
                writeln!(out, "Not admitted: {} {}", record.first_name, record.last_name)?;
            }
            Err(err) => {
                writeln!(out, "Invalid record {} {}: {}", record.first_name, record.last_name, err)?;
            }
        }
    }

    for &number in &args.remove {
        match team.remove_player(number) {
            Ok(Removal::Removed(player)) => writeln!(
                out,
                "Removed: {}, {}, Jersey Number: {}",
                player.first_name(),
                player.last_name(),
                number
            )?,
            Ok(Removal::NotFound) => writeln!(out, "No player with jersey number {}", number)?,
            Err(err) => writeln!(out, "Cannot remove {}: {}", number, err)?,
        }
    }

    writeln!(out, "Team Size:\n{}", team.team_size())?;
    writeln!(out, "\nAll Players in the Team:")?;
    out.push_str(&render_list(&team.all_players()));

    match team.starting_lineup() {
        Ok(starters) => {
            writeln!(out, "\nStarting Lineup List:")?;
            out.push_str(&render_list(&starters));
            writeln!(out, "\nBench Players:")?;
            out.push_str(&render_list(&team.bench_players()?));
        }
        Err(err @ RosterError::RosterTooSmall { .. }) => writeln!(out, "\n{}", err)?,
        Err(err) => return Err(err.into()),
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    const DEMO: &str = include_str!("../../../demos/players.json");

    fn write_players(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("players.json");
        fs::write(&path, body).unwrap();
        path
    }

    fn show(players: PathBuf, remove: Vec<i64>) -> ShowArgs {
        ShowArgs {
            players,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 1),
            seed: None,
            remove,
        }
    }

    fn section<'a>(output: &'a str, header: &str) -> Vec<&'a str> {
        output
            .split(header)
            .nth(1)
            .unwrap_or("")
            .lines()
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn test_show_demo_roster() {
        let dir = TempDir::new().unwrap();
        let output = run(&show(write_players(&dir, DEMO), vec![])).unwrap();

        assert!(output.starts_with("Team Size:\n11\n"));
        assert_eq!(section(&output, "All Players in the Team:").len(), 11);
        assert_eq!(section(&output, "Starting Lineup List:").len(), 7);
        assert_eq!(section(&output, "Bench Players:").len(), 4);
        assert!(output.contains("Nick, Anderson, Jersey Number: 7\n"));
    }

    #[test]
    fn test_show_reports_removals_and_too_small_roster() {
        let dir = TempDir::new().unwrap();
        let output = run(&show(write_players(&dir, DEMO), vec![3, 13, 300, -1, 1])).unwrap();

        assert!(output.contains("Removed: Maria, Johnson, Jersey Number: 3\n"));
        assert!(output.contains("No player with jersey number 13\n"));
        assert!(output.contains("No player with jersey number 300\n"));
        assert!(output.contains("No player with jersey number -1\n"));
        assert!(output.contains("Team Size:\n9\n"));
        assert!(output.contains("The team must have at least 10 players, found 9"));
        assert!(!output.contains("Starting Lineup List:"));
    }

    #[test]
    fn test_show_reports_invalid_and_rejected_records() {
        let dir = TempDir::new().unwrap();
        let mut records: Vec<_> = (0..20)
            .map(|i| {
                json!({
                    "first_name": format!("P{:02}", i), "last_name": "Strong",
                    "year": 2016, "month": 2, "day": 2,
                    "position": "Midfielder", "skill_level": 3
                })
            })
            .collect();
        records.push(json!({
            "first_name": "Too", "last_name": "Good",
            "year": 2016, "month": 2, "day": 2, "position": "Forward", "skill_level": 9
        }));
        records.push(json!({
            "first_name": "Bad", "last_name": "Month",
            "year": 2016, "month": -1, "day": 2, "position": "Forward", "skill_level": 4
        }));
        records.push(json!({
            "first_name": "A", "last_name": "A",
            "year": 2016, "month": 2, "day": 2, "position": "Forward", "skill_level": 1
        }));
        let path = write_players(&dir, &serde_json::to_string(&records).unwrap());

        let output = run(&show(path, vec![])).unwrap();
        assert!(output.contains("Invalid record Too Good: "));
        assert!(output.contains("Invalid record Bad Month: "));
        assert!(output.contains("Not admitted: A A\n"));
        assert!(output.contains("Team Size:\n20\n"));
    }

    #[test]
    fn test_show_fails_on_unreadable_input() {
        let dir = TempDir::new().unwrap();
        assert!(run(&show(dir.path().join("missing.json"), vec![])).is_err());
        let path = write_players(&dir, "[{\"first_name\": 1}]");
        assert!(run(&show(path, vec![])).is_err());
    }

    #[test]
    fn test_cli_parses_show_arguments() {
        let cli = Cli::parse_from([
            "u10_cli", "-vv", "show", "--players", "team.json", "--as-of", "2024-03-01",
            "--seed", "7", "--remove", "4", "--remove", "-1", "--remove", "300",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Show(args) = cli.command;
        assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.remove, vec![4, -1, 300]);
    }
}
