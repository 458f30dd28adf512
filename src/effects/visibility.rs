//! Viewport visibility trigger for entrance animations.
//!
//! The platform intersection observer is represented as an event feed; the
//! trigger folds that feed into a watch-published boolean.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Observer configuration.
///
/// `threshold` and `root_margin` belong to whatever establishes the platform
/// observer feeding the event channel; the trigger itself keys off the
/// event's intersection flag.
#[derive(Debug, Clone)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            once: true,
        }
    }
}

/// A single observer callback notification.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionEvent {
    pub is_intersecting: bool,
}

/// Per-element visibility state.
///
/// Starts `false`; the first intersecting event sets it `true`. With
/// `once = true` (the default) observation then stops permanently and the
/// state stays `true` even if the element later leaves the viewport. With
/// `once = false` the state tracks live intersection in both directions.
pub struct VisibilityTrigger {
    rx: watch::Receiver<bool>,
    task: Option<JoinHandle<()>>,
}

impl VisibilityTrigger {
    /// Begin observing.
    ///
    /// `target` is the event feed for the observed element; `None` means the
    /// element was absent at mount, so no observation is established and the
    /// state stays `false`. Not an error.
    pub fn observe(
        target: Option<mpsc::Receiver<IntersectionEvent>>,
        options: VisibilityOptions,
    ) -> Self {
        let (tx, rx) = watch::channel(false);

        let task = target.map(|mut events| {
            tokio::spawn(async move {
                while let Some(event) = events.recv().await {
                    if event.is_intersecting {
                        tx.send_if_modified(|visible| {
                            let changed = !*visible;
                            *visible = true;
                            changed
                        });
                        if options.once {
                            // Unobserve: state frozen at true
                            break;
                        }
                    } else if !options.once {
                        tx.send_if_modified(|visible| {
                            let changed = *visible;
                            *visible = false;
                            changed
                        });
                    }
                }
            })
        });

        Self { rx, task }
    }

    /// Current visibility state.
    pub fn is_visible(&self) -> bool {
        *self.rx.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// Stop observing, regardless of current state.
    pub fn release(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for VisibilityTrigger {
    fn drop(&mut self) {
        self.release();
    }
}
