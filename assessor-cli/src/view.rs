//! Health status view
//!
//! Renders the page heading and a single line reporting backend health.
//!
//! Lifecycle:
//! - `mount` starts exactly one health check in the background
//! - the check settles the view to `Resolved` or `Unreachable`
//! - `unmount` (or dropping the view) cancels the check; a result that
//!   arrives afterwards is discarded

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use assessor_client::HealthSource;
use assessor_core::PAGE_HEADING;
use assessor_core::domain::display::DisplayState;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The two rendered lines of the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Page heading, always [`PAGE_HEADING`]
    pub heading: &'static str,
    /// Status line, e.g. `Backend Status: ok`
    pub status_line: String,
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        write!(f, "{}", self.status_line)
    }
}

/// Displays backend health fetched once per mount
pub struct HealthStatusView {
    state: Arc<watch::Sender<DisplayState>>,
    alive: Arc<AtomicBool>,
    mounted: bool,
    task: Option<JoinHandle<()>>,
}

impl HealthStatusView {
    /// Create an unmounted view showing the placeholder
    pub fn new() -> Self {
        let (tx, _) = watch::channel(DisplayState::Loading);
        Self {
            state: Arc::new(tx),
            alive: Arc::new(AtomicBool::new(false)),
            mounted: false,
            task: None,
        }
    }

    /// Attach the view and start the health check
    ///
    /// Only the first call issues a request. Later calls, including after
    /// [`unmount`](Self::unmount), do nothing.
    pub fn mount(&mut self, source: Arc<dyn HealthSource>) {
        if self.mounted {
            debug!("health status view already mounted, not refetching");
            return;
        }
        self.mounted = true;
        self.alive.store(true, Ordering::Release);

        let state = Arc::clone(&self.state);
        let alive = Arc::clone(&self.alive);

        self.task = Some(tokio::spawn(async move {
            let outcome = match source.fetch_health().await {
                Ok(health) => DisplayState::Resolved(health.status),
                Err(e) => {
                    warn!(error = %e, "backend health check failed");
                    DisplayState::Unreachable(e.to_string())
                }
            };

            let applied = state.send_if_modified(|current| {
                if !alive.load(Ordering::Acquire) {
                    return false;
                }
                *current = outcome;
                true
            });

            if !applied {
                debug!("health status view unmounted, dropping result");
            }
        }));
    }

    /// Detach the view and cancel any in-flight health check
    pub fn unmount(&mut self) {
        // Flipped under the channel lock so it serializes with the task's write
        self.state.send_if_modified(|_| {
            self.alive.store(false, Ordering::Release);
            false
        });

        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Wait until the in-flight health check finishes or is cancelled
    ///
    /// Returns immediately when nothing is in flight.
    pub async fn settled(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        if let Err(e) = task.await {
            if !e.is_cancelled() {
                warn!(error = %e, "health check task panicked");
            }
        }
    }

    /// Current display state
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Render heading and status line
    pub fn render(&self) -> Rendered {
        Rendered {
            heading: PAGE_HEADING,
            status_line: self.state.borrow().status_line(),
        }
    }
}

impl Default for HealthStatusView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HealthStatusView {
    fn drop(&mut self) {
        self.unmount();
    }
}
