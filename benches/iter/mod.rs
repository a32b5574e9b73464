use std::hint::black_box;

use avldict::BalancedMap;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = BalancedMap::default();

    for _i in 0..n_values {
        t.insert(rand.next_key(), 42_usize);
    }

    bench_iter(n_values, g, &t);
    bench_prefix_empty(n_values, g, &t);
    bench_prefix_one(n_values, g, &t);
    bench_prefix_two(n_values, g, &t);
    bench_prefix_three(n_values, g, &t);
}

fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &BalancedMap<String, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            let iter = t.iter();
            for v in iter {
                black_box(v);
            }
        })
    });
}

/// Generate a benchmark of a prefix search for the given prefix, each
/// additional hex digit matching 1/16th of the keys of the last.
macro_rules! prefix_bench {
    (
        $name:ident, $prefix:literal
    ) => {
        paste::paste! {
            fn [<bench_prefix_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &BalancedMap<String, usize>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: concat!("prefix_", stringify!($name)),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        let iter = t.prefix(black_box($prefix));
                        for v in iter {
                            black_box(v);
                        }
                    })
                });
            }
        }
    }
}

prefix_bench!(empty, "");
prefix_bench!(one, "a");
prefix_bench!(two, "a1");
prefix_bench!(three, "a1f");
