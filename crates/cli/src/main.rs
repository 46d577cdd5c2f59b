//! Pipeline simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Program run:** Load a JSON or assembly program, run it to HALT, and report.
//! 2. **Demo:** Run a built-in program that exercises the cache and the load-use stall.
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for cache traffic or
//! pass `--trace` for a per-cycle pipeline diagram.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use pipesim_core::common::NUM_REGS;
use pipesim_core::sim::loader;
use pipesim_core::{Config, Instruction, Program, SimError, SimStats, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate pipelined core and cache simulator",
    long_about = "Run a program on a three-stage pipelined core with a direct-mapped write-through cache.\n\nPrograms are JSON instruction arrays (*.json) or assembly text.\n\nExamples:\n  sim run programs/sum.asm --regs\n  sim run prog.json --config cfg.json --json\n  sim demo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program file until it halts.
    Run {
        /// Program to execute (`.json` or assembly text).
        program: PathBuf,

        /// JSON configuration file; built-in defaults otherwise.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the step cap from the configuration.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Emit a per-cycle pipeline diagram.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Dump the register file after the run.
        #[arg(long)]
        regs: bool,

        /// Print the memory word at ADDR after the run (repeatable).
        #[arg(long = "mem", value_name = "ADDR")]
        mem: Vec<u32>,
    },

    /// Run the built-in demo program and dump its state.
    Demo,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            max_steps,
            trace,
            json,
            regs,
            mem,
        } => cmd_run(&RunArgs {
            program,
            config,
            max_steps,
            trace,
            json,
            regs,
            mem,
        }),
        Commands::Demo => cmd_demo(),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
struct RunArgs {
    program: PathBuf,
    config: Option<PathBuf>,
    max_steps: Option<u64>,
    trace: bool,
    json: bool,
    regs: bool,
    mem: Vec<u32>,
}

/// Loads the program and configuration, runs to HALT, and prints the report.
fn cmd_run(args: &RunArgs) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_steps {
        config.general.max_steps = max;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }

    let program = loader::load_program(&args.program)?;
    println!(
        "[*] {}: {} instructions",
        args.program.display(),
        program.len()
    );

    let mut sim = Simulator::new(program, &config)?;
    let stats = sim.run()?;

    report(&sim, &stats, args.json, args.regs, &args.mem)
}

/// Runs the built-in demo program.
fn cmd_demo() -> Result<(), SimError> {
    let program = Program::new(vec![
        Instruction::addi(3, 0, 7),
        Instruction::store(3, 0, 0),
        Instruction::load(1, 0, 0),
        Instruction::load(2, 0, 0),
        Instruction::add(4, 1, 1),
        Instruction::load(5, 0, 0),
        Instruction::addi(6, 5, 1),
        Instruction::add(7, 3, 0),
        Instruction::halt(),
    ])?;

    println!("[*] Demo program:");
    for (pc, inst) in program.iter().enumerate() {
        println!("    {pc:>3}: {inst}");
    }
    println!();

    let mut sim = Simulator::new(program, &Config::default())?;
    let stats = sim.run()?;

    report(&sim, &stats, false, true, &[0])
}

fn report(
    sim: &Simulator,
    stats: &SimStats,
    json: bool,
    regs: bool,
    mem: &[u32],
) -> Result<(), SimError> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        stats.print();
    }

    for &addr in mem {
        println!("mem[{addr}] = {}", sim.mem_word(addr)?);
    }

    if regs {
        println!("Register dump:");
        for i in 0..NUM_REGS {
            let v = sim.reg(i);
            if v != 0 {
                println!("  x{i:<2} = {v}");
            }
        }
    }
    Ok(())
}
