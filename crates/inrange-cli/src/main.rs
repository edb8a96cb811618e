//! Command-line driver for a register file addressed by bounded indices.
//!
//! The register file holds 16 signed 64-bit registers, all zero at startup.
//! Every register access goes through an [`ArrayIndex<16>`], so an index that
//! is out of range is rejected when the index is built and never reaches the
//! register file.
//!
//! # Usage
//!
//! ```sh
//! inrange --set 2=42 --get 2
//! inrange --set 2=42 --set 16=1 --dump
//! RUST_LOG=debug inrange --set 0=7 --get 0
//! ```
//!
//! The exit status is 1 if any request used an index outside `0..16`, and 2 if
//! the command line could not be parsed.

use std::process;

use clap::Parser;
use inrange_core::{ArrayIndex, BoundsError, FixedArray};

use crate::request::Assignment;

mod request;

const REGISTER_COUNT: usize = 16;

type Registers = FixedArray<i64, REGISTER_COUNT>;
type RegisterIndex = ArrayIndex<REGISTER_COUNT>;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Store VALUE in register INDEX. Repeatable; applied in order.
    #[arg(short, long = "set", value_name = "INDEX=VALUE")]
    sets: Vec<Assignment>,

    /// Print the value of register INDEX after all stores. Repeatable.
    #[arg(short, long = "get", value_name = "INDEX")]
    gets: Vec<usize>,

    /// Print every register after all stores.
    #[arg(long)]
    dump: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "applying {} store(s) and {} load(s) to {REGISTER_COUNT} registers",
        args.sets.len(),
        args.gets.len()
    );

    let mut registers = Registers::new();
    let mut rejected = 0_usize;

    for assignment in &args.sets {
        if let Err(err) = store(&mut registers, *assignment) {
            eprintln!(
                "Rejected --set {}={}: {err}",
                assignment.index, assignment.value
            );
            rejected += 1;
        }
    }

    for &index in &args.gets {
        match load(&registers, index) {
            Ok(value) => println!("r{index} = {value}"),
            Err(err) => {
                eprintln!("Rejected --get {index}: {err}");
                rejected += 1;
            }
        }
    }

    if args.dump {
        for index in RegisterIndex::all() {
            println!("r{index} = {}", registers[index]);
        }
    }

    if rejected > 0 {
        log::info!("{rejected} request(s) rejected");
        process::exit(1);
    }
}

fn store(registers: &mut Registers, assignment: Assignment) -> Result<(), BoundsError> {
    let index = RegisterIndex::new(assignment.index)?;
    log::debug!("r{index} <- {}", assignment.value);
    registers[index] = assignment.value;
    Ok(())
}

fn load(registers: &Registers, index: usize) -> Result<i64, BoundsError> {
    let index = RegisterIndex::new(index)?;
    let value = registers[index];
    log::debug!("r{index} -> {value}");
    Ok(value)
}
