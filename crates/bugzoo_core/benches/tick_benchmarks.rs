use bugzoo_core::analyzer::analyze_code_patterns;
use bugzoo_core::generator::generate;
use bugzoo_core::simulation::run_tick_with_rng;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLE: &str = r#"
function load(path) {
    const f = fs.open(path);
    while (true) {
        for (let i = 0; i <= items.length; i++) {
            console.log(items[i]);
        }
    }
}
"#;

fn bench_analyze(c: &mut Criterion) {
    let code = SAMPLE.repeat(20);
    c.bench_function("analyze_code_patterns_4k", |b| {
        b.iter(|| black_box(analyze_code_patterns(black_box(&code))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let code = SAMPLE.repeat(20);
    c.bench_function("generate_4k", |b| {
        b.iter(|| black_box(generate(black_box(&code))))
    });
}

fn bench_tick(c: &mut Criterion) {
    let Ok(zoo) = generate(&SAMPLE.repeat(20)) else {
        return;
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut creatures = zoo.creatures;

    c.bench_function("run_tick_steady_state", |b| {
        b.iter(|| {
            let outcome = run_tick_with_rng(&creatures, &mut rng);
            creatures = if outcome.creatures.is_empty() {
                generate(SAMPLE).map(|z| z.creatures).unwrap_or_default()
            } else {
                outcome.creatures
            };
            black_box(creatures.len())
        })
    });
}

criterion_group!(benches, bench_analyze, bench_generate, bench_tick);
criterion_main!(benches);
