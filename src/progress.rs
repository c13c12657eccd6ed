//! Periodic "configurations traversed" status line.
//!
//! The search publishes its visited count through [`Reporter::record`]; a
//! background thread samples it every interval. Nothing else is shared.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct Reporter {
    counter: Arc<AtomicUsize>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Reporter {
    pub fn spawn(interval: Duration) -> Self {
        Self::with_progress_bar(interval, ProgressBar::new_spinner())
    }

    /// Like [`Reporter::spawn`], drawing to `bar` instead of stderr.
    pub fn with_progress_bar(interval: Duration, bar: ProgressBar) -> Self {
        let counter = Arc::new(AtomicUsize::new(0));
        let (stop, stop_rx) = mpsc::channel::<()>();

        let style = ProgressStyle::with_template("{spinner} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);

        let sampled = Arc::clone(&counter);
        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let cnt = sampled.load(Ordering::Relaxed);
                        log::debug!("{cnt} configurations traversed");
                        bar.set_message(format!("{cnt} configurations traversed"));
                        bar.tick();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            bar.finish_and_clear();
        });

        Self {
            counter,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    pub fn record(&self, visited: usize) {
        self.counter.store(visited, Ordering::Relaxed);
    }

    /// Last count published.
    pub fn visited(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }

    /// Stop sampling and wait for the reporter thread to exit.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the thread up with `Disconnected`.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Progress reporter panicked");
            }
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
