//! Webview Visibility Observer
//!
//! Bridges [`VisibilityObserver`] to the hosting webview through
//! `document::eval`. The injected script picks the best capability available:
//!
//! | Host capability | Reports |
//! |-----------------|---------|
//! | `IntersectionObserver` | `intersection` samples at each threshold, then `geometry` once per frame while on screen |
//! | `getBoundingClientRect` only | `geometry` on scroll / resize, once per frame |
//! | neither | a single `unsupported` |
//!
//! Each live host observer is registered under its target id in
//! `window.__folioReveal` so that [`EvalObserver::release`] can disconnect it
//! from a drop hook, after the observing task has already been cancelled.

use dioxus::document::{self, Eval};
use folio_core::{FolioError, ObserveRequest, Result, VisibilityObserver, VisibilitySignal};

const OBSERVE_SCRIPT: &str = r#"
const request = await dioxus.recv();
const registry = (window.__folioReveal = window.__folioReveal || {});
if (registry[request.target]) {
  registry[request.target]();
}

const element = document.getElementById(request.target);
let cleanup = null;

const measure = () => {
  const rect = element.getBoundingClientRect();
  dioxus.send({
    kind: "geometry",
    top: rect.top,
    height: rect.height,
    viewport_height: window.innerHeight,
  });
};
let queued = false;
const schedule = () => {
  if (queued) return;
  queued = true;
  requestAnimationFrame(() => {
    queued = false;
    measure();
  });
};
let tracking = false;
const track = (on) => {
  if (on === tracking) return;
  tracking = on;
  if (on) {
    window.addEventListener("scroll", schedule, { passive: true });
    window.addEventListener("resize", schedule);
  } else {
    window.removeEventListener("scroll", schedule);
    window.removeEventListener("resize", schedule);
  }
};

if (!element) {
  dioxus.send({ kind: "missing" });
} else if ("IntersectionObserver" in window) {
  // Entries fire on element-height fractions; while the section is on
  // screen, per-frame geometry fills the gaps for sections taller than
  // the viewport.
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      dioxus.send({
        kind: "intersection",
        visible_height: entry.intersectionRect.height,
        element_height: entry.boundingClientRect.height,
        viewport_height: window.innerHeight,
      });
      track(entry.isIntersecting);
    }
  }, { threshold: request.thresholds });
  observer.observe(element);
  cleanup = () => {
    observer.disconnect();
    track(false);
  };
} else if (typeof element.getBoundingClientRect === "function") {
  track(true);
  cleanup = () => track(false);
  measure();
} else {
  dioxus.send({ kind: "unsupported" });
}

if (cleanup) {
  await new Promise((resolve) => {
    registry[request.target] = () => {
      delete registry[request.target];
      cleanup();
      resolve();
    };
  });
}
"#;

const RELEASE_SCRIPT: &str = r#"
const target = await dioxus.recv();
const registry = window.__folioReveal;
if (registry && registry[target]) {
  registry[target]();
}
"#;

/// Visibility observer backed by a script running in the webview.
#[derive(Default)]
pub struct EvalObserver {
    eval: Option<Eval>,
    target: Option<String>,
}

impl EvalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disconnect the host observer registered for `target`, if any.
    ///
    /// Safe to call from `use_drop`; does nothing when no observer exists.
    pub fn release(target: &str) {
        let eval = document::eval(RELEASE_SCRIPT);
        if let Err(e) = eval.send(target) {
            tracing::debug!(section = target, error = ?e, "Could not release visibility observer");
        }
    }
}

impl VisibilityObserver for EvalObserver {
    fn observe(&mut self, target: &str, thresholds: &[f64]) -> Result<()> {
        let eval = document::eval(OBSERVE_SCRIPT);
        eval.send(ObserveRequest {
            target: target.to_string(),
            thresholds: thresholds.to_vec(),
        })
        .map_err(|e| FolioError::Observer(format!("{e:?}")))?;

        self.eval = Some(eval);
        self.target = Some(target.to_string());
        Ok(())
    }

    async fn next_signal(&mut self) -> Option<VisibilitySignal> {
        let eval = self.eval.as_mut()?;
        match eval.recv::<VisibilitySignal>().await {
            Ok(signal) => Some(signal),
            Err(e) => {
                tracing::warn!(
                    section = ?self.target,
                    error = ?e,
                    "Visibility channel failed"
                );
                self.eval = None;
                Some(VisibilitySignal::Unsupported)
            }
        }
    }

    fn stop(&mut self) {
        if let Some(target) = self.target.take() {
            Self::release(&target);
        }
        self.eval = None;
    }
}
