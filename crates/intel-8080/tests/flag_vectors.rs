//! Flag-rule conformance vectors.
//!
//! Each vector in `tests/data/flags.json` loads a short program at
//! address 0, executes it and compares the accumulator plus all five
//! flags against the documented flag rules.

use emu_core::SimpleBus;
use intel_8080::I8080;
use serde::Deserialize;

#[derive(Deserialize)]
struct Vector {
    name: String,
    /// Raw program bytes, loaded at address 0.
    program: Vec<u8>,
    steps: usize,
    a: u8,
    z: u8,
    s: u8,
    p: u8,
    cy: u8,
    ac: u8,
}

#[test]
fn flag_vectors() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/flags.json");
    let data = std::fs::read_to_string(path).expect("vector file should exist");
    let vectors: Vec<Vector> = serde_json::from_str(&data).expect("vector file should parse");
    assert!(!vectors.is_empty());

    for vector in &vectors {
        let mut bus = SimpleBus::new();
        bus.load(0x0000, &vector.program);
        let mut cpu = I8080::new();

        for _ in 0..vector.steps {
            cpu.step(&mut bus)
                .unwrap_or_else(|fault| panic!("{}: {fault}", vector.name));
        }

        let regs = cpu.registers();
        assert_eq!(regs.a, vector.a, "{}: A", vector.name);
        assert_eq!(u8::from(regs.zero()), vector.z, "{}: Z", vector.name);
        assert_eq!(u8::from(regs.sign()), vector.s, "{}: S", vector.name);
        assert_eq!(u8::from(regs.parity()), vector.p, "{}: P", vector.name);
        assert_eq!(u8::from(regs.carry()), vector.cy, "{}: CY", vector.name);
        assert_eq!(u8::from(regs.aux_carry()), vector.ac, "{}: AC", vector.name);
    }
}
