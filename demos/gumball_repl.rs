//! Gumball Machine REPL
//!
//! Drives a machine backed by an in-memory device from stdin.
//!
//! Commands:
//! - `insert`, `eject`, `crank`, `refill`: machine actions
//! - `load <n>`: put n gumballs into the device (then `refill`)
//! - `state`: print state and device counters
//! - `history`: print the action history as JSON
//! - `quit`
//!
//! Run with: cargo run --example gumball_repl
//! Set GUMBALL_LOG=debug to see transitions.

use gumball::{Action, GumballMachine, GumballMachineBuilder, MemoryDevice};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};

fn init_logging() {
    let level = std::env::var("GUMBALL_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn print_status(machine: &GumballMachine<MemoryDevice>) {
    let device = machine.device();
    println!(
        "state={} gumballs={} sold={} coins_returned={}",
        machine.state(),
        device.count(),
        device.gumballs_dispensed(),
        device.coins_returned()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut machine = GumballMachineBuilder::new()
        .device(MemoryDevice::new())
        .track_history(true)
        .build()?;

    let mut shown = machine.device().lines().len();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in machine.device().lines() {
        println!("[display] {}", line);
    }

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let mut words = input.split_whitespace();
        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("state") => print_status(&machine),
            Some("history") => {
                if let Some(history) = machine.history() {
                    println!("{}", history.to_json()?);
                }
            }
            Some("load") => match words.next().map(str::parse::<u32>) {
                Some(Ok(count)) => {
                    machine.device_mut().add_gumballs(count);
                    println!("loaded {} gumballs", count);
                }
                _ => println!("usage: load <count>"),
            },
            Some(word) => match word.parse::<Action>() {
                Ok(action) => {
                    machine.dispatch(action);
                }
                Err(err) => println!("{}", err),
            },
        }

        for line in &machine.device().lines()[shown..] {
            println!("[display] {}", line);
        }
        shown = machine.device().lines().len();
    }

    print_status(&machine);
    Ok(())
}
