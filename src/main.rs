//! APEX Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, configuration loading, program loading, and the simulation
//! loop.
//!
//! # Usage
//!
//! Four commands share the same tick engine:
//! 1. **simulate N file** - run up to N cycles or until HALT.
//! 2. **display file** - run to HALT with per-cycle state.
//! 3. **single_step file** - run with a prompt between cycles.
//! 4. **show_mem file addr** - run quietly, then print one memory word.

use std::io::{self, BufRead, Write};
use std::{fs, process};

use clap::{Parser, Subcommand};

use apex_emulator::config::Config;
use apex_emulator::core::{Cpu, StopReason, TickOutcome};
use apex_emulator::sim::loader;

/// Command-line arguments for the APEX pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "APEX Five-Stage Pipeline Simulator")]
struct Args {
    /// TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Write end-of-run statistics as JSON to this path.
    #[arg(long)]
    stats_json: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run up to N cycles or until HALT.
    #[command(name = "simulate")]
    Simulate { cycles: u64, file: String },

    /// Run to HALT, printing per-cycle pipeline state.
    #[command(name = "display")]
    Display { file: String },

    /// Advance one cycle at a time, prompting between ticks.
    #[command(name = "single_step")]
    SingleStep { file: String },

    /// Run to HALT, then print the data-memory word at ADDR.
    #[command(name = "show_mem")]
    ShowMem { file: String, addr: i32 },
}

fn main() {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("[!] Cannot read config '{}': {}", path, e);
                process::exit(1);
            });
            toml::from_str(&content).unwrap_or_else(|e| {
                eprintln!("[!] Cannot parse config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    let file = match &args.command {
        Command::Simulate { file, .. }
        | Command::Display { file }
        | Command::SingleStep { file }
        | Command::ShowMem { file, .. } => file.clone(),
    };

    let program = loader::load_program(&file).unwrap_or_else(|e| {
        eprintln!("[!] Load error: {}", e);
        process::exit(1);
    });

    let mut cpu = Cpu::new(program, &config);

    match args.command {
        Command::Simulate { cycles, .. } => {
            print_program(&cpu);
            report(run_or_die(&mut cpu, Some(cycles)), &cpu);
        }
        Command::Display { .. } => {
            cpu.trace = true;
            print_program(&cpu);
            report(run_or_die(&mut cpu, None), &cpu);
        }
        Command::SingleStep { .. } => {
            cpu.trace = true;
            print_program(&cpu);
            single_step(&mut cpu);
        }
        Command::ShowMem { addr, .. } => {
            cpu.trace = false;
            let _ = run_or_die(&mut cpu, None);
            match cpu.data.read(addr) {
                Some(val) => println!("MEM[{}] = {}", addr, val),
                None => {
                    eprintln!("[!] Address {} outside data memory", addr);
                    process::exit(1);
                }
            }
        }
    }

    if let Some(path) = args.stats_json {
        let json = cpu.stats.to_json().unwrap_or_else(|e| {
            eprintln!("[!] Cannot serialize stats: {}", e);
            process::exit(1);
        });
        if let Err(e) = fs::write(&path, json) {
            eprintln!("[!] Cannot write '{}': {}", path, e);
            process::exit(1);
        }
    }
}

/// Prints the decoded program listing when tracing is enabled.
fn print_program(cpu: &Cpu) {
    if !cpu.trace {
        return;
    }
    println!("APEX: loaded {} instructions, PC starts at 4000", cpu.code.len());
    for insn in cpu.code.iter() {
        println!("  {}", insn);
    }
}

/// Runs to halt (or for `limit` cycles), exiting the process on a fatal
/// simulation fault.
fn run_or_die(cpu: &mut Cpu, limit: Option<u64>) -> StopReason {
    let outcome = match limit {
        Some(cycles) => cpu.simulate(cycles),
        None => cpu.run(),
    };
    outcome.unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        cpu.print_arch_state();
        cpu.stats.print();
        process::exit(1);
    })
}

/// Prints the end-of-run summary and statistics.
fn report(reason: StopReason, cpu: &Cpu) {
    match reason {
        StopReason::Halted => println!(
            "APEX: simulation complete, cycles = {} instructions = {}",
            cpu.clock, cpu.stats.instructions_retired
        ),
        StopReason::CycleLimit => println!(
            "APEX: cycle limit reached, cycles = {} instructions = {}",
            cpu.clock, cpu.stats.instructions_retired
        ),
    }
    cpu.print_arch_state();
    cpu.stats.print();
}

/// Runs tick-by-tick, prompting between cycles; `q` quits.
fn single_step(cpu: &mut Cpu) {
    let stdin = io::stdin();
    loop {
        match cpu.tick() {
            Ok(TickOutcome::Halted) => {
                report(StopReason::Halted, cpu);
                return;
            }
            Ok(TickOutcome::Running) => {}
            Err(e) => {
                eprintln!("\n[!] FATAL: {}", e);
                cpu.print_arch_state();
                process::exit(1);
            }
        }

        print!("Press ENTER to advance the clock, or q to quit: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.trim().eq_ignore_ascii_case("q") {
            println!(
                "APEX: simulation stopped, cycles = {} instructions = {}",
                cpu.clock, cpu.stats.instructions_retired
            );
            return;
        }
    }
}
