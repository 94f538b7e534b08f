//! Core War MARS command-line driver.
//!
//! This binary is the single entry point for running and inspecting warriors. It performs:
//! 1. **Battles:** Place warrior binaries at random, run one or more rounds, report the standings.
//! 2. **Disassembly:** Print a warrior binary as Redcode with addresses.
//! 3. **Dump:** Place warriors into core and print every occupied block as hex words.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mars_core::common::error::LoadError;
use mars_core::isa::disasm;
use mars_core::sim::battle::{self, BattleResult};
use mars_core::sim::{Program, Simulation, place_randomly};
use mars_core::{MarsConfig, MarsError};

#[derive(Parser, Debug)]
#[command(
    name = "mars",
    author,
    version,
    about = "Memory Array Redcode Simulator",
    long_about = "Run Core War battles between compiled warrior binaries.\n\nA warrior binary is a sequence of big-endian 32-bit opcode words.\nWarriors are numbered from 1 in the order given.\n\nExamples:\n  mars run imp.bin dwarf.bin\n  mars run --rounds 100 --seed 7 imp.bin dwarf.bin\n  mars disasm dwarf.bin\n  mars dump --seed 7 --core-size 400 imp.bin dwarf.bin"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a battle between warrior binaries.
    Run {
        #[command(flatten)]
        setup: MatchArgs,

        /// Number of rounds to play.
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,

        /// Print simulation statistics after each round.
        #[arg(long)]
        stats: bool,

        /// Warrior binaries.
        #[arg(required = true)]
        warriors: Vec<PathBuf>,
    },

    /// Disassemble a warrior binary.
    Disasm {
        /// Warrior binary.
        file: PathBuf,

        /// Address shown for the first word.
        #[arg(long, default_value_t = 0)]
        base: usize,
    },

    /// Place warriors into core and hex-dump every occupied block.
    Dump {
        #[command(flatten)]
        setup: MatchArgs,

        /// Warrior binaries.
        #[arg(required = true)]
        warriors: Vec<PathBuf>,
    },
}

/// Core geometry and placement options shared by `run` and `dump`.
#[derive(Args, Debug)]
struct MatchArgs {
    /// JSON configuration file; command-line flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cells in core.
    #[arg(long)]
    core_size: Option<usize>,

    /// Cells per placement block.
    #[arg(long)]
    block_size: Option<usize>,

    /// Tick budget per round.
    #[arg(long)]
    duration: Option<u64>,

    /// Seed for placement; omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,
}

impl MatchArgs {
    /// Builds the match configuration from an optional file plus flag overrides.
    fn config(&self) -> Result<MarsConfig, MarsError> {
        let mut config = match &self.config {
            Some(p) => {
                let text = fs::read_to_string(p).map_err(LoadError::from)?;
                MarsConfig::from_json(&text)?
            }
            None => MarsConfig::default(),
        };
        if let Some(n) = self.core_size {
            config.core_size = n;
        }
        if let Some(n) = self.block_size {
            config.block_size = n;
        }
        if let Some(n) = self.duration {
            config.duration = n;
        }
        config.validate()?;
        debug!(?config, "configuration");
        Ok(config)
    }

    /// Placement generator: seeded when `--seed` is given.
    fn rng(&self) -> SmallRng {
        self.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            setup,
            rounds,
            stats,
            warriors,
        } => cmd_run(&setup, rounds, stats, &warriors),
        Commands::Disasm { file, base } => cmd_disasm(&file, base),
        Commands::Dump { setup, warriors } => cmd_dump(&setup, &warriors),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads a warrior binary from disk.
fn read_program(id: u32, path: &Path) -> Result<Program, MarsError> {
    let file = File::open(path).map_err(LoadError::from)?;
    Ok(Program::read_from(id, file)?)
}

/// Reads warrior binaries, numbering them from 1.
fn read_programs(paths: &[PathBuf]) -> Result<Vec<Program>, MarsError> {
    paths
        .iter()
        .zip(1u32..)
        .map(|(path, id)| read_program(id, path))
        .collect()
}

/// Plays `rounds` battles and prints the standings.
///
/// Each round starts from a fresh core; every warrior is placed in its own
/// random block. Placement draws from one generator across all rounds, so a
/// fixed `seed` reproduces the whole series.
fn cmd_run(
    setup: &MatchArgs,
    rounds: u32,
    stats: bool,
    paths: &[PathBuf],
) -> Result<(), MarsError> {
    let config = setup.config()?;
    let programs = read_programs(paths)?;
    let mut rng = setup.rng();
    let mut wins = vec![0u32; programs.len()];
    let mut ties = 0u32;
    let mut wipeouts = 0u32;

    for round in 1..=rounds {
        let mut sim = Simulation::new(config)?;
        for program in &programs {
            let _ = place_randomly(&mut sim, program, &mut rng)?;
        }
        info!(round, warriors = programs.len(), "round start");

        let report = battle::run(&mut sim)?;
        println!("Round {round}: {} after {} ticks", report.result, report.ticks);
        for e in &report.eliminations {
            println!(
                "  warrior {} eliminated at {} on tick {}: {}",
                e.id, e.addr, e.tick, e.cause
            );
        }
        match report.result {
            BattleResult::Winner { id } => {
                if let Some(w) = wins.get_mut(id as usize - 1) {
                    *w += 1;
                }
            }
            BattleResult::Tie { .. } => ties += 1,
            BattleResult::NoSurvivors => wipeouts += 1,
        }
        if stats {
            println!();
            print!("{}", sim.stats());
        }
    }

    if rounds > 1 {
        println!();
        println!("Standings over {rounds} rounds:");
        for ((path, id), w) in paths.iter().zip(1u32..).zip(&wins) {
            println!("  {id}  {w:>6} wins  {}", path.display());
        }
        println!("     {ties:>6} ties");
        if wipeouts > 0 {
            println!("     {wipeouts:>6} rounds without survivors");
        }
    }
    Ok(())
}

/// Prints a Redcode listing of a warrior binary.
fn cmd_disasm(path: &Path, base: usize) -> Result<(), MarsError> {
    let program = read_program(0, path)?;
    print!("{}", disasm::listing(program.words(), base));
    Ok(())
}

/// Places every warrior and prints the contents of each occupied block.
fn cmd_dump(setup: &MatchArgs, paths: &[PathBuf]) -> Result<(), MarsError> {
    let mut sim = Simulation::new(setup.config()?)?;
    let mut rng = setup.rng();
    for program in read_programs(paths)? {
        let handle = place_randomly(&mut sim, &program, &mut rng)?;
        if let Some(w) = sim.warrior(handle) {
            println!("warrior {} at {}", w.id, w.pc);
        }
    }

    let memory = sim.memory();
    for index in (0..memory.block_count()).filter(|&i| memory.is_block_occupied(i)) {
        if let Some(cells) = memory.block(index) {
            println!();
            println!("block {index} @ {}", index * memory.block_size());
            print!("{}", disasm::hex_dump(cells));
        }
    }
    Ok(())
}
