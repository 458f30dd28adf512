//! Typewriter effect for the hero terminal.
//!
//! Reveals a fixed string one character at a time and blinks a cursor until
//! shortly after completion. Fully autonomous once started; dropping the
//! handle cancels both timers.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Cursor blink period while typing is in progress.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// How long the cursor stays solid after the last character before going
/// dark for good.
pub const CURSOR_LINGER: Duration = Duration::from_millis(2000);

/// Timing configuration.
#[derive(Debug, Clone)]
pub struct TypewriterOptions {
    /// Delay between characters
    pub delay: Duration,
    /// Delay before the first character
    pub initial_delay: Duration,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(80),
            initial_delay: Duration::from_millis(500),
        }
    }
}

/// Observable typing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    /// Revealed prefix of the source string, grows one char at a time
    pub display_text: String,
    /// True from the moment the final character lands
    pub is_complete: bool,
    /// Blinks while incomplete; solid after completion, then permanently off
    pub show_cursor: bool,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            display_text: String::new(),
            is_complete: false,
            show_cursor: true,
        }
    }
}

/// Handle to a running typewriter.
///
/// The reveal timer and the blink timer are independent tasks sharing the
/// state cell; their relative ordering within a tick is unspecified.
pub struct Typewriter {
    rx: watch::Receiver<TypingState>,
    type_task: JoinHandle<()>,
    blink_task: JoinHandle<()>,
}

impl Typewriter {
    /// Start typing `text` on the current runtime.
    pub fn start(text: impl Into<String>, options: TypewriterOptions) -> Self {
        let text = text.into();
        let (tx, rx) = watch::channel(TypingState::default());

        let blink_tx = tx.clone();
        let blink_task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(CURSOR_BLINK_INTERVAL).await;
                blink_tx.send_modify(|state| {
                    if !state.is_complete {
                        state.show_cursor = !state.show_cursor;
                    }
                });
            }
        });

        let blink_abort = blink_task.abort_handle();
        let type_task = tokio::spawn(async move {
            tokio::time::sleep(options.initial_delay).await;

            let total = text.chars().count();
            for (i, c) in text.chars().enumerate() {
                if i > 0 {
                    tokio::time::sleep(options.delay).await;
                }
                let last = i + 1 == total;
                tx.send_modify(|state| {
                    state.display_text.push(c);
                    if last {
                        state.is_complete = true;
                        state.show_cursor = true;
                    }
                });
            }
            if total == 0 {
                // Empty source: complete right after the initial delay
                tx.send_modify(|state| {
                    state.is_complete = true;
                    state.show_cursor = true;
                });
            }

            tokio::time::sleep(CURSOR_LINGER).await;
            tx.send_modify(|state| state.show_cursor = false);
            blink_abort.abort();
        });

        Self {
            rx,
            type_task,
            blink_task,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TypingState {
        self.rx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<TypingState> {
        self.rx.clone()
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.type_task.abort();
        self.blink_task.abort();
    }
}
