//! Match Runner - background thread that ticks an arena match at a fixed interval

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tdm::{TickResult, TICK_RATE};
use tracing::{error, info, warn};

use crate::game::ArenaMatch;

/// Milliseconds between ticks at engine speed
pub const REALTIME_INTERVAL_MS: u64 = 1000 / TICK_RATE;

/// Ticks a shared match on its own thread until stopped or the match closes
pub struct MatchRunner {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MatchRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start ticking.
    ///
    /// # Arguments
    /// * `game` - Shared match, already started
    /// * `interval_ms` - Milliseconds between ticks ([`REALTIME_INTERVAL_MS`] for engine speed)
    /// * `callback` - Called with every tick result, outside the lock
    pub fn start<F>(&mut self, game: Arc<Mutex<ArenaMatch>>, interval_ms: u64, callback: F)
    where
        F: Fn(TickResult) + Send + 'static,
    {
        if self.is_running.load(Ordering::Relaxed) {
            warn!("Match runner already running");
            return;
        }
        // A previous run may have stopped on its own
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }

        info!("Starting match runner ({}ms intervals)", interval_ms);
        self.is_running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let tick_result = match game.lock() {
                    Ok(mut g) => g.tick(),
                    Err(_) => {
                        error!("Match lock poisoned, stopping runner");
                        break;
                    }
                };

                let closed = tick_result.closed;
                callback(tick_result);
                if closed {
                    info!("Match closed at tick {}", tick_result.tick);
                    break;
                }

                thread::sleep(Duration::from_millis(interval_ms));
            }
            running.store(false, Ordering::Relaxed);
            info!("Match runner thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    /// Stop ticking and wait for the thread.
    pub fn stop(&mut self) {
        if self.is_running.swap(false, Ordering::Relaxed) {
            info!("Stopping match runner...");
        }
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }

    /// Block until the thread exits by itself (match closed or lock poisoned).
    pub fn wait(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MatchRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
