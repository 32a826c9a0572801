//! Interactive console runner for the 8080 core.
//!
//! Loads a raw program image at address 0 and single-steps it, printing a
//! register dump between steps. Enter advances one instruction; a number
//! advances that many, clamped to `MAX_STEPS`. The loop ends when PC runs
//! past the loaded image or the core reports a fault.

use std::fs;
use std::io::{self, BufRead, Write};

use emu_core::SimpleBus;
use intel_8080::I8080;

/// Upper bound on a single advance request.
const MAX_STEPS: u64 = 100_000;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: i8080-runner <image.bin>");
        std::process::exit(1);
    };

    let image = match fs::read(&path) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Error: couldn't open {path}: {err}");
            std::process::exit(1);
        }
    };
    if image.len() > 65536 {
        eprintln!("Error: {path} does not fit in the 64 KiB address space");
        std::process::exit(1);
    }

    let mut bus = SimpleBus::new();
    bus.load(0, &image);
    let mut cpu = I8080::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut executed: u64 = 0;
    let mut to_advance: u64 = 0;

    while (cpu.pc() as usize) < image.len() {
        print_state(&cpu, executed);

        if to_advance == 0 {
            print!("Press enter to advance one instruction, or enter a count: ");
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                break;
            };
            to_advance = parse_steps(&line);
            if to_advance == 0 {
                continue;
            }
        }

        if let Err(fault) = cpu.step(&mut bus) {
            eprintln!("Error: {fault}");
            std::process::exit(1);
        }
        executed += 1;
        to_advance -= 1;
    }

    println!("Program ran past the end of the loaded image.");
    print_state(&cpu, executed);
    println!("Image size: {:#06x} bytes", image.len());
}

/// Number of instructions to advance: blank input means one, anything
/// non-numeric means zero so the caller re-prompts, and large requests
/// clamp to `MAX_STEPS`.
fn parse_steps(input: &str) -> u64 {
    let input = input.trim();
    if input.is_empty() {
        return 1;
    }
    input.parse::<u64>().map_or(0, |n| n.min(MAX_STEPS))
}

fn print_state(cpu: &I8080, executed: u64) {
    let regs = cpu.registers();
    println!();
    println!("Registers:");
    println!("A: {:02x}", regs.a);
    println!("B: {:02x}", regs.b);
    println!("C: {:02x}", regs.c);
    println!("D: {:02x}", regs.d);
    println!("E: {:02x}", regs.e);
    println!("H: {:02x}", regs.h);
    println!("L: {:02x}", regs.l);
    println!();
    println!("Stack pointer: {:04x}", regs.sp);
    println!("Program counter: {:04x}", regs.pc);
    println!();
    println!("Status flags:");
    println!("Z:  {}", u8::from(regs.zero()));
    println!("S:  {}", u8::from(regs.sign()));
    println!("P:  {}", u8::from(regs.parity()));
    println!("CY: {}", u8::from(regs.carry()));
    println!("AC: {}", u8::from(regs.aux_carry()));
    println!();
    println!("Int enable: {}", u8::from(regs.int_enable));
    println!("Instructions executed: {executed}");
}
