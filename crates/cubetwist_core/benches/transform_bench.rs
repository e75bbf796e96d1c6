#![allow(missing_docs, unused_crate_dependencies)]

use cubetwist_core::scramble::{self, ScrambleParams};
use cubetwist_core::{Cube, CubeKind, CubeState, validation_code};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn criterion_benchmark(c: &mut Criterion) {
    for kind in [CubeKind::Pocket, CubeKind::Rubik, CubeKind::Revenge, CubeKind::Professor] {
        let twists = scramble::generate(kind.layer_count(), &ScrambleParams::new(100));

        c.bench_with_input(
            BenchmarkId::new("state_apply_twist", kind.id()),
            &twists,
            |b, twists| {
                b.iter_batched(
                    || CubeState::new(kind.variant()),
                    |mut state| {
                        for &t in twists {
                            state.apply_twist(t).unwrap();
                        }
                        state
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        let cube = Cube::new(kind);
        c.bench_with_input(BenchmarkId::new("cube_apply", kind.id()), &twists, |b, twists| {
            b.iter(|| cube.apply_all(twists.iter().copied()).unwrap())
        });
    }

    let twists = scramble::generate(3, &ScrambleParams::new(25));
    let mut state = CubeState::new(CubeKind::Rubik.variant());
    for &t in &twists {
        state.apply_twist(t).unwrap();
    }
    let grid = state.to_stickers().unwrap();
    c.bench_function("validate_rubik", |b| b.iter(|| validation_code(&grid)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
