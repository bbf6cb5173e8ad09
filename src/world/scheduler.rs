//! Tick scheduling. [`TickScheduler`] is pure bookkeeping over injected
//! instants so tests can drive time synchronously; [`spawn_ticker`] is
//! the wall-clock runner the binary uses, with a cancellation flag that
//! guarantees no tick fires after `cancel` returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the runner thread re-checks the clock and the cancel flag.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Tracks when world ticks fall due on a fixed cadence. Time is always
/// passed in, never read, so a test can hand it any sequence of instants.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self::with_origin(interval, Instant::now())
    }

    /// Starts the cadence at an explicit origin instant.
    pub fn with_origin(interval: Duration, origin: Instant) -> Self {
        Self {
            interval,
            last_tick: origin,
        }
    }

    /// Number of full intervals elapsed since the last due tick, catching
    /// up after a stall. Advances the internal cursor by exactly the
    /// returned count.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0u32;
        while now.duration_since(self.last_tick) >= self.interval {
            self.last_tick += self.interval;
            due += 1;
        }
        due
    }
}

/// Handle to a running ticker thread. Dropping it signals the thread to
/// stop; [`TickerHandle::cancel`] additionally waits until it has fully
/// exited, after which no further tick can mutate anything.
pub struct TickerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Signals the ticker and blocks until the thread is gone.
    pub fn cancel(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

/// Spawns a thread that invokes `on_tick` every `interval`, sleeping in
/// short slices so cancellation is prompt. The flag is re-checked
/// immediately before each invocation; a cancelled ticker never runs the
/// callback again.
pub fn spawn_ticker<F>(interval: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let mut scheduler = TickScheduler::new(interval);
        loop {
            if stop_flag.load(Ordering::SeqCst) {
                break;
            }
            thread::sleep(POLL_SLICE.min(interval));
            let due = scheduler.due_ticks(Instant::now());
            for _ in 0..due {
                if stop_flag.load(Ordering::SeqCst) {
                    return;
                }
                on_tick();
            }
        }
    });

    TickerHandle {
        stop,
        thread: Some(thread),
    }
}
