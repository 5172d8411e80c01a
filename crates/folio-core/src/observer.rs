//! Visibility observation and the per-section reveal driver.
//!
//! A [`VisibilityObserver`] turns one DOM element into a stream of
//! [`VisibilitySignal`]s. [`run_reveal`] consumes that stream for a single
//! section, feeds it through a [`RevealMachine`] and reports transitions.
//!
//! ## Degradation
//!
//! Content must never stay invisible because the host lacks a capability. If
//! the observer cannot start, reports `Unsupported`, or cannot find the
//! element, the section is forced to `Revealed` and observation ends.

use tokio::sync::mpsc;

use crate::config::RevealConfig;
use crate::error::{FolioError, Result};
use crate::reveal::{RevealMachine, RevealTransition};
use crate::visibility::{ObserveRequest, VisibilitySignal};

/// Source of visibility signals for one element.
///
/// Implementations are single-threaded; the hosting UI runtime polls
/// `next_signal` on its own event loop.
#[allow(async_fn_in_trait)]
pub trait VisibilityObserver {
    /// Start observing the element with DOM id `target`, reporting whenever
    /// its intersection ratio crosses one of `thresholds`.
    fn observe(&mut self, target: &str, thresholds: &[f64]) -> Result<()>;

    /// Wait for the next signal. `None` means the stream has ended.
    async fn next_signal(&mut self) -> Option<VisibilitySignal>;

    /// Release the host observer. Must be safe to call more than once.
    fn stop(&mut self);
}

/// Why a reveal driver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The signal stream ended
    Closed,
    /// A `Once` section was revealed and no longer needs observing
    Settled,
    /// Visibility could not be detected; the section was forced visible
    Degraded,
}

/// Drive one section's reveal state from `observer` until the stream ends.
///
/// `on_transition` is called once per actual state change. The observer is
/// always stopped before this returns.
pub async fn run_reveal<O, F>(
    observer: &mut O,
    target: &str,
    config: &RevealConfig,
    mut on_transition: F,
) -> RevealOutcome
where
    O: VisibilityObserver,
    F: FnMut(RevealTransition),
{
    let mut machine = RevealMachine::new(config);

    if let Err(e) = observer.observe(target, &config.observer_thresholds()) {
        tracing::warn!(section = target, error = %e, "Visibility observer failed to start, revealing section");
        if let Some(transition) = machine.force_reveal() {
            on_transition(transition);
        }
        observer.stop();
        return RevealOutcome::Degraded;
    }

    let outcome = loop {
        let Some(signal) = observer.next_signal().await else {
            break RevealOutcome::Closed;
        };

        let Some(ratio) = signal.ratio() else {
            tracing::warn!(section = target, ?signal, "Visibility detection unavailable, revealing section");
            if let Some(transition) = machine.force_reveal() {
                on_transition(transition);
            }
            break RevealOutcome::Degraded;
        };

        if let Some(transition) = machine.observe(ratio) {
            tracing::debug!(
                section = target,
                ratio,
                from = %transition.from,
                to = %transition.to,
                "Reveal transition"
            );
            on_transition(transition);
        }

        if machine.is_settled() {
            break RevealOutcome::Settled;
        }
    };

    observer.stop();
    outcome
}

/// Observer fed from an in-process channel.
///
/// Useful for scripted visibility sources (tests, headless previews). The
/// sending half plays the role of the host.
#[derive(Debug)]
pub struct ChannelObserver {
    rx: mpsc::UnboundedReceiver<VisibilitySignal>,
    request: Option<ObserveRequest>,
    stopped: bool,
    stop_calls: usize,
}

/// Create a connected sender / observer pair.
pub fn channel() -> (mpsc::UnboundedSender<VisibilitySignal>, ChannelObserver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let observer = ChannelObserver {
        rx,
        request: None,
        stopped: false,
        stop_calls: 0,
    };
    (tx, observer)
}

impl ChannelObserver {
    /// The request passed to `observe`, if any.
    pub fn request(&self) -> Option<&ObserveRequest> {
        self.request.as_ref()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn stop_calls(&self) -> usize {
        self.stop_calls
    }
}

impl VisibilityObserver for ChannelObserver {
    fn observe(&mut self, target: &str, thresholds: &[f64]) -> Result<()> {
        if let Some(existing) = &self.request {
            return Err(FolioError::Observer(format!(
                "already observing {}",
                existing.target
            )));
        }
        self.request = Some(ObserveRequest {
            target: target.to_string(),
            thresholds: thresholds.to_vec(),
        });
        Ok(())
    }

    async fn next_signal(&mut self) -> Option<VisibilitySignal> {
        if self.stopped {
            return None;
        }
        self.rx.recv().await
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.stop_calls += 1;
        self.rx.close();
    }
}
