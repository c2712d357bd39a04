use indicatif::{ProgressBar, ProgressStyle};
use parmap::observer::ProgressObserver;
use parmap::MapPoolBuilder;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Renders run progress as a terminal bar. The pool only reports counts;
/// all drawing stays out here.
struct BarObserver {
    bar: ProgressBar,
}

impl ProgressObserver for BarObserver {
    fn on_progress(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
    }
}

fn main() {
    let total = 64u64;

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
            .expect("static template"),
    );

    let pool = MapPoolBuilder::new()
        .with_progress_observer(Arc::new(BarObserver { bar: bar.clone() }))
        .build()
        .expect("default worker count is always valid");

    let results = pool
        .run_collect(
            |n: u64| {
                thread::sleep(Duration::from_millis(25));
                n * 2
            },
            0..total,
        )
        .expect("no work item fails here");

    bar.finish();
    println!("Collected {} results on {} workers", results.len(), pool.worker_count());
}
