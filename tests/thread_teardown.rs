#![cfg(any(target_os = "linux", target_os = "windows"))]

use parmap::MapPool;
use std::thread;
use std::time::Duration;

#[cfg(target_os = "windows")]
fn count_threads() -> usize {
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processthreadsapi::GetCurrentProcessId;
    use winapi::um::tlhelp32::{
        CreateToolhelp32Snapshot, Thread32First, Thread32Next, TH32CS_SNAPTHREAD, THREADENTRY32,
    };

    unsafe {
        let own_pid = GetCurrentProcessId();
        let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPTHREAD, 0);
        if snapshot == INVALID_HANDLE_VALUE {
            return 0;
        }

        let mut entry = THREADENTRY32 {
            dwSize: std::mem::size_of::<THREADENTRY32>() as u32,
            cntUsage: 0,
            th32ThreadID: 0,
            th32OwnerProcessID: 0,
            tpBasePri: 0,
            tpDeltaPri: 0,
            dwFlags: 0,
        };

        if Thread32First(snapshot, &mut entry) == 0 {
            return 0;
        }

        let mut threads = 0;
        loop {
            if entry.th32OwnerProcessID == own_pid {
                threads += 1;
            }
            if Thread32Next(snapshot, &mut entry) == 0 {
                break;
            }
        }
        threads
    }
}

#[cfg(target_os = "linux")]
fn count_threads() -> usize {
    use procfs::process::Process;

    let process = Process::myself().expect("failed to read own process info");
    process.tasks().expect("failed to read task list").count()
}

// Both the success and the failure path must leave no worker threads behind,
// so both are exercised against one baseline in a single test.
#[test]
fn workers_exit_after_every_run() {
    let initial_thread_count = count_threads();

    let pool = MapPool::new();
    pool.run(
        |_: u64| thread::sleep(Duration::from_millis(5)),
        0..32u64,
    )
    .unwrap();

    // Allow joined threads to be reaped before counting
    thread::sleep(Duration::from_millis(100));
    assert_eq!(
        count_threads(),
        initial_thread_count,
        "expected all workers to exit after a successful run"
    );

    let outcome = pool.run(
        |n: u64| {
            if n == 3 {
                panic!("giving up");
            }
            thread::sleep(Duration::from_millis(5));
        },
        0..32u64,
    );
    assert!(outcome.is_err());

    thread::sleep(Duration::from_millis(100));
    assert_eq!(
        count_threads(),
        initial_thread_count,
        "expected all workers to exit after a failed run"
    );
}
