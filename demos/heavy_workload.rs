use parmap::MapPoolBuilder;
use std::time::Instant;

fn cpu_task(seed: u64) -> u64 {
    (0..20_000u64).fold(seed, |acc, x| acc.wrapping_mul(31).wrapping_add(x))
}

fn main() {
    let num_tasks = 50_000u64;

    // Full pool
    let pool = MapPoolBuilder::new()
        .build()
        .expect("default worker count is always valid");
    let start = Instant::now();
    let results = pool
        .run_collect(cpu_task, 0..num_tasks)
        .expect("no work item fails here");
    println!(
        "Time with {} workers: {:.2?} ({} results)",
        pool.worker_count(),
        start.elapsed(),
        results.len()
    );

    // Single worker, same work
    let single = MapPoolBuilder::new()
        .worker_count(1)
        .build()
        .expect("one worker is always within bounds");
    let start = Instant::now();
    let results = single
        .run_collect(cpu_task, 0..num_tasks)
        .expect("no work item fails here");
    println!(
        "Time with 1 worker:  {:.2?} ({} results)",
        start.elapsed(),
        results.len()
    );
}
