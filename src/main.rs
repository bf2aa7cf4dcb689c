use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pokemon_movedex::config::validate_repetitions;
use pokemon_movedex::{
    compute_cycle_counts, cycles_for_charged_move, initialize_catalog, CalculatorConfig,
    CycleTable, MoveCatalog,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "movedex")]
#[command(about = "Move lists and fast-move energy cycles for Pokemon")]
struct Args {
    /// RON config file; defaults apply when it does not exist
    #[arg(long, default_value = "movedex.ron")]
    config: PathBuf,

    /// Directory holding the move tables (overrides the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a Pokemon's fast and charged moves
    Moves { pokemon: String },
    /// Fast-move uses needed to fire one charged move repeatedly
    Cycles {
        pokemon: String,
        /// Fast move(s); several names are combined into one energy rate
        #[arg(long = "fast", required = true)]
        fast_moves: Vec<String>,
        /// Charged move to look up in the catalog
        #[arg(long, conflicts_with = "energy", required_unless_present = "energy")]
        charged: Option<String>,
        /// Raw charged-move energy cost instead of a move name
        #[arg(long)]
        energy: Option<u32>,
        #[arg(long)]
        repetitions: Option<usize>,
    },
    /// Cycle counts for every charged/fast move pairing of a Pokemon
    Table {
        pokemon: String,
        #[arg(long)]
        repetitions: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = CalculatorConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    if let Some(data) = args.data {
        config.data_path = data;
    }

    let catalog = initialize_catalog(&config).context("loading move data")?;

    match args.command {
        Command::Moves { pokemon } => {
            let pokemon = resolve(&catalog, &pokemon)?;
            print_moves(&catalog, pokemon, args.json)
        }
        Command::Cycles {
            pokemon,
            fast_moves,
            charged,
            energy,
            repetitions,
        } => {
            let pokemon = resolve(&catalog, &pokemon)?;
            let repetitions = validate_repetitions(repetitions.unwrap_or(config.repetitions))?;
            let outcome = match (charged.as_deref(), energy) {
                (Some(charged), _) => {
                    cycles_for_charged_move(&catalog, pokemon, fast_moves.as_slice(), charged, repetitions)
                }
                (None, Some(energy)) => {
                    compute_cycle_counts(&catalog, pokemon, fast_moves.as_slice(), energy, repetitions)
                }
                (None, None) => bail!("either --charged or --energy is required"),
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }
            match outcome {
                Ok(result) => {
                    println!("Fast moves needed per charged move: {}", result);
                    println!("Energy left over: {}", result.remainder);
                }
                Err(reason) => println!("Not computable: {}", reason),
            }
            Ok(())
        }
        Command::Table {
            pokemon,
            repetitions,
        } => {
            let pokemon = resolve(&catalog, &pokemon)?;
            let repetitions = validate_repetitions(repetitions.unwrap_or(config.repetitions))?;
            let table = CycleTable::build(&catalog, pokemon, repetitions);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!(
                    "Amount of moves it takes to execute one charged move ({} consecutive times):",
                    repetitions
                );
                print!("{}", table);
            }
            Ok(())
        }
    }
}

fn resolve<'a>(catalog: &'a MoveCatalog, name: &str) -> Result<&'a str> {
    match catalog.resolve_pokemon(name) {
        Some(pokemon) => Ok(pokemon),
        None => bail!("Pokemon '{}' not found in move data", name),
    }
}

fn print_moves(catalog: &MoveCatalog, pokemon: &str, json: bool) -> Result<()> {
    if json {
        let listing = serde_json::json!({
            "pokemon": pokemon,
            "fast_moves": catalog.fast_moves_of(pokemon).collect::<Vec<_>>(),
            "charged_moves": catalog.charged_moves_of(pokemon).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", pokemon);
    println!("Fast Moves:");
    for record in catalog.fast_moves_of(pokemon) {
        println!("  {}", record);
    }
    println!("Charged Moves:");
    for record in catalog.charged_moves_of(pokemon) {
        println!("  {}", record);
    }
    Ok(())
}
