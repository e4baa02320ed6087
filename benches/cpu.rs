use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gibbon::gb::GameBoy;

fn empty_rom() -> Vec<u8> {
    vec![0u8; 0x8000]
}

fn benchmark_cpu_clock(c: &mut Criterion) {
    let data = empty_rom();

    c.bench_function("cpu_clock_1m_steps", |b| {
        b.iter(|| {
            let mut gb = GameBoy::load_cartridge(&data).unwrap();
            for _ in 0..1_000_000 {
                black_box(gb.clock());
            }
        })
    });
}

criterion_group!(benches, benchmark_cpu_clock);
criterion_main!(benches);
