use criterion::{criterion_group, BenchmarkId, Criterion};
use itertools::kmerge_by;
use loser_tree::{merge_iters, IterSequence, SliceSequence, Tournament};
use rand::prelude::*;

const SENTINEL: u64 = u64::MAX;

fn closest_divisible<I>(iter: I, target: usize) -> usize
where
    I: Iterator<Item = usize>,
{
    fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }
    fn lcm(a: usize, b: usize) -> usize {
        a.checked_mul(b).unwrap() / gcd(a, b)
    }

    let lcm = iter.fold(1, lcm);
    ((target as f64) / (lcm as f64)).round() as usize * lcm
}

/// Splits `vec` into `n_runs` runs of equal length and sorts each of them
fn sorted_runs(mut vec: Vec<u64>, n_runs: usize) -> Vec<u64> {
    let run_len = vec.len() / n_runs;
    vec.chunks_mut(run_len).for_each(<[u64]>::sort_unstable);
    vec
}

fn bench_vs_itertools(c: &mut Criterion, name: &str, vec: &[u64], run_counts: &[usize]) {
    let mut group = c.benchmark_group(name);
    for n_runs in run_counts.iter().copied() {
        let runs = sorted_runs(vec.to_vec(), n_runs);
        let run_len = runs.len() / n_runs;
        group.bench_function(BenchmarkId::new("LoserTree", n_runs), |b| {
            b.iter(|| {
                Tournament::new(runs.chunks(run_len).map(SliceSequence::new), SENTINEL)
                    .arbitrary_tie_breaking()
                    .build()
                    .into_vec()
            });
        });
        group.bench_function(BenchmarkId::new("LoserTree over iterators", n_runs), |b| {
            b.iter(|| merge_iters(runs.chunks(run_len).map(|run| run.iter().copied()), SENTINEL).into_vec());
        });
        group.bench_function(BenchmarkId::new("Itertools kmerge_by", n_runs), |b| {
            b.iter(|| {
                kmerge_by(
                    runs.chunks(run_len).map(|run| run.iter().copied()),
                    |a: &u64, b: &u64| a < b,
                )
                .collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

fn bench_itertools(c: &mut Criterion) {
    let run_counts = [8, 32, 128, 256, 512, 1024, 1536, 2048, 3072, 4096];
    let n_els = closest_divisible(run_counts.iter().copied(), 2_usize.pow(20));
    let mut rng = StdRng::seed_from_u64(0);

    let vec = (0..n_els)
        .map(|_| rng.random_range(0..SENTINEL))
        .collect::<Vec<u64>>();
    bench_vs_itertools(c, "Random runs VS Itertools", &vec, &run_counts);

    // Runs that barely overlap: most replays end at the first match
    let vec = (0..n_els as u64).collect::<Vec<u64>>();
    bench_vs_itertools(c, "Disjoint runs VS Itertools", &vec, &run_counts);

    // Many duplicates stress tie breaking
    let vec = (0..n_els)
        .map(|_| rng.random_range(0..16))
        .collect::<Vec<u64>>();
    bench_vs_itertools(c, "Duplicate-heavy runs VS Itertools", &vec, &run_counts);
}

fn bench_configs(c: &mut Criterion) {
    const N_RUNS: usize = 64;
    let n_els = 2_usize.pow(20);
    let mut rng = StdRng::seed_from_u64(0);
    let runs = sorted_runs(
        (0..n_els)
            .map(|_| rng.random_range(0..SENTINEL))
            .collect(),
        N_RUNS,
    );
    let run_len = n_els / N_RUNS;

    let mut group = c.benchmark_group(format!(
        "Configs ({n_els} values; {N_RUNS} runs{})",
        if cfg!(feature = "forbid_unsafe") {
            "; forbid_unsafe"
        } else {
            ""
        }
    ));

    group.bench_function("Arbitrary", |b| {
        b.iter(|| {
            Tournament::new(runs.chunks(run_len).map(SliceSequence::new), SENTINEL)
                .arbitrary_tie_breaking()
                .build()
                .into_vec()
        });
    });
    group.bench_function("Stable", |b| {
        b.iter(|| {
            Tournament::new(runs.chunks(run_len).map(SliceSequence::new), SENTINEL)
                .build()
                .into_vec()
        });
    });
    group.bench_function("Stable, winner/advance", |b| {
        b.iter(|| {
            let mut tree =
                Tournament::new(runs.chunks(run_len).map(SliceSequence::new), SENTINEL).build();
            let mut sum = 0_u64;
            while *tree.winner().0 != SENTINEL {
                sum = sum.wrapping_add(*tree.winner().0);
                tree.advance();
            }
            sum
        });
    });
    group.bench_function("Stable, iterator sequences", |b| {
        b.iter(|| {
            Tournament::new(
                runs.chunks(run_len)
                    .map(|run| IterSequence::new(run.iter().copied())),
                SENTINEL,
            )
            .build()
            .into_vec()
        });
    });
    #[cfg(feature = "stackvec_storage")]
    group.bench_function("Arbitrary, stackvec", |b| {
        b.iter(|| {
            Tournament::new_stackvec::<N_RUNS>(runs.chunks(run_len).map(SliceSequence::new), SENTINEL)
                .arbitrary_tie_breaking()
                .build()
                .into_vec()
        });
    });
    #[cfg(feature = "stackvec_storage")]
    group.bench_function("Stable, stackvec", |b| {
        b.iter(|| {
            Tournament::new_stackvec::<N_RUNS>(runs.chunks(run_len).map(SliceSequence::new), SENTINEL)
                .build()
                .into_vec()
        });
    });
    group.finish();
}

#[cfg(not(feature = "forbid_unsafe"))]
criterion_group!(benches, bench_itertools, bench_configs);
#[cfg(feature = "forbid_unsafe")]
criterion_group!(benches, bench_configs);
