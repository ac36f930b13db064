//! Benchmarks for Enigma machine operations.
//!
//! Measures machine construction, per-message `process()` throughput, and
//! how plugboard size and non-alphabetic content affect throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Machine, MachineConfig};

/// Message length used for throughput benchmarks.
const MESSAGE_LEN: usize = 4096;

fn bench_config() -> MachineConfig {
    MachineConfig::default()
        .with_positions([5, 10, 15])
        .with_ring_settings([1, 2, 3])
        .with_plugboard(&[('A', 'B'), ('C', 'D'), ('E', 'F')])
}

/// Benchmarks `Machine::new()` including rotor lookup and plugboard validation.
fn bench_construction(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("machine_new", |b| {
        b.iter(|| Machine::new(black_box(&config)).unwrap());
    });
}

/// Benchmarks `process()` over an all-letter message.
///
/// The machine is built once and keeps stepping between iterations, as a
/// long-running stream would.
fn bench_process(c: &mut Criterion) {
    let mut machine = Machine::new(&bench_config()).unwrap();
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
        .chars()
        .cycle()
        .take(MESSAGE_LEN)
        .collect::<String>();

    let mut group = c.benchmark_group("process");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    group.bench_function("letters", |b| {
        b.iter(|| machine.process(black_box(&message)));
    });
    group.finish();
}

/// Benchmarks `process()` across plugboard sizes of 0, 6, and 13 pairs.
fn bench_plugboard_scaling(c: &mut Criterion) {
    let alphabet: Vec<char> = ('A'..='Z').collect();
    let message = "A".repeat(MESSAGE_LEN);

    let mut group = c.benchmark_group("plugboard_scaling");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    for &pairs in &[0usize, 6, 13] {
        let plugboard: Vec<(char, char)> = alphabet
            .chunks_exact(2)
            .take(pairs)
            .map(|p| (p[0], p[1]))
            .collect();
        let config = MachineConfig::default().with_plugboard(&plugboard);
        let mut machine = Machine::new(&config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(pairs), &pairs, |b, _| {
            b.iter(|| machine.process(black_box(&message)));
        });
    }

    group.finish();
}

/// Benchmarks `process()` over prose with spaces and punctuation.
fn bench_mixed_text(c: &mut Criterion) {
    let mut machine = Machine::new(&bench_config()).unwrap();
    let message = "The quick brown fox, 42 times, jumps over the lazy dog! "
        .chars()
        .cycle()
        .take(MESSAGE_LEN)
        .collect::<String>();

    let mut group = c.benchmark_group("process_mixed");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    group.bench_function("prose", |b| {
        b.iter(|| machine.process(black_box(&message)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_process,
    bench_plugboard_scaling,
    bench_mixed_text,
);
criterion_main!(benches);
