use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use iterchain::{iter, range};
use std::hint::black_box;

#[library_benchmark]
fn find_first_prime_chain() -> bool {
    let number = black_box(104_729);
    range(2, number / 2)
        .find_first(|divisor| number % divisor == 0)
        .is_none()
}

#[library_benchmark]
fn find_first_prime_loop() -> bool {
    let number = black_box(104_729);
    for divisor in 2..number / 2 {
        if number % divisor == 0 {
            return false;
        }
    }
    true
}

#[library_benchmark]
fn filter_map_sum_chain() -> i64 {
    range(0, black_box(10_000_i64))
        .filter(|x| x % 3 == 0)
        .map(|x| x * x)
        .sum::<i64>()
}

#[library_benchmark]
fn filter_map_sum_loop() -> i64 {
    let mut total = 0;
    for x in 0..black_box(10_000_i64) {
        if x % 3 == 0 {
            total += x * x;
        }
    }
    total
}

#[library_benchmark]
fn slice_sum_chain() -> u64 {
    let values: Vec<u64> = (0..1_000).collect();
    iter(black_box(&values)).sum::<u64>()
}

library_benchmark_group!(
    name = find_first_group;
    benchmarks = find_first_prime_chain, find_first_prime_loop
);

library_benchmark_group!(
    name = pipeline_group;
    benchmarks = filter_map_sum_chain, filter_map_sum_loop, slice_sum_chain
);

main!(library_benchmark_groups = find_first_group, pipeline_group);
