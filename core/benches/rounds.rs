use criterion::{Criterion, criterion_group, criterion_main};
use sapeur_core::{
    Minefield, MinefieldGenerator, RandomMinefieldGenerator, Round, RoundConfig,
};

fn bench_generate(c: &mut Criterion) {
    let sparse = RoundConfig::new(8).unwrap();
    let dense = RoundConfig::new(60).unwrap();

    c.bench_function("generate_8_mines", |b| {
        b.iter(|| RandomMinefieldGenerator::new(7).generate(&sparse))
    });
    c.bench_function("generate_60_mines", |b| {
        b.iter(|| RandomMinefieldGenerator::new(7).generate(&dense))
    });
}

fn bench_reveal(c: &mut Criterion) {
    let minefield = Minefield::from_mine_coords(&[(3, 19)]).unwrap();

    c.bench_function("reveal_window", |b| {
        b.iter(|| {
            let mut round = Round::new(minefield.clone());
            round.reveal((1, 1))
        })
    });
}

criterion_group!(benches, bench_generate, bench_reveal);
criterion_main!(benches);
