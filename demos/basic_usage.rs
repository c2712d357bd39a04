fn main() {
    let pool = parmap::MapPool::new();
    let squares = pool
        .run_collect(|n: u64| n * n, 0..8u64)
        .expect("no work item fails here");
    println!("Squares: {:?}", squares);
}
