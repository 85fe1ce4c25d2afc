//! # Notification Emitter
//!
//! Transient "added to cart" toasts that dismiss themselves.
//!
//! ## Toast Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t = 0          notify(): mount element, phase = Entering               │
//! │  t = 100 ms     phase = Shown       (slides in)                         │
//! │  t = 3000 ms    phase = Leaving     (slides out)                        │
//! │  t = 3500 ms    remove element                                          │
//! │                                                                         │
//! │  Every step first checks the element is still on the surface.           │
//! │  Each toast runs on its own task: overlapping toasts never share or     │
//! │  cancel each other's timers.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cancellation
//! Dropping a [`ToastHandle`] does nothing; the toast runs to completion.
//! [`ToastHandle::cancel`] stops one toast, [`NotificationEmitter::dispose_all`]
//! stops every pending toast (use it when the surface goes away).

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::surface::{NotificationSurface, ToastId, ToastPhase, ToastView};

type LiveToasts = Arc<Mutex<HashMap<ToastId, AbortHandle>>>;

// =============================================================================
// Timing
// =============================================================================

/// When a toast moves between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Mount → Shown.
    pub enter_delay: Duration,
    /// Mount → Leaving.
    pub display: Duration,
    /// Leaving → removed.
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        NotificationTiming {
            enter_delay: Duration::from_millis(100),
            display: Duration::from_millis(3000),
            exit: Duration::from_millis(500),
        }
    }
}

// =============================================================================
// Emitter
// =============================================================================

/// Shows toasts on a [`NotificationSurface`].
///
/// Cloning is cheap; clones share the surface and the set of live toasts.
#[derive(Clone)]
pub struct NotificationEmitter {
    surface: Arc<dyn NotificationSurface>,
    timing: NotificationTiming,
    runtime: Handle,
    live: LiveToasts,
}

impl NotificationEmitter {
    /// Creates an emitter bound to the current tokio runtime.
    ///
    /// ## Errors
    /// [`PageError::NoRuntime`] when called outside a runtime: toasts could
    /// never be dismissed.
    pub fn new(
        surface: Arc<dyn NotificationSurface>,
        timing: NotificationTiming,
    ) -> PageResult<Self> {
        let runtime = Handle::try_current().map_err(|_| PageError::NoRuntime)?;

        Ok(NotificationEmitter {
            surface,
            timing,
            runtime,
            live: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Mounts a toast with `message` and schedules its dismissal.
    pub fn notify(&self, message: &str) -> ToastHandle {
        let id = ToastId::new();

        self.surface.mount(ToastView {
            id,
            message: message.to_string(),
            phase: ToastPhase::Entering,
            created_at: Utc::now(),
        });

        // Held across spawn so the task cannot deregister before it is registered.
        let mut live = self.live.lock().expect("toast registry poisoned");
        let task = self.runtime.spawn(run_toast(
            id,
            Arc::clone(&self.surface),
            self.timing,
            Arc::clone(&self.live),
        ));
        let abort = task.abort_handle();
        live.insert(id, abort.clone());
        drop(live);

        debug!(%id, text = message, "Toast scheduled");

        ToastHandle {
            id,
            abort,
            surface: Arc::clone(&self.surface),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of toasts whose timers are still pending.
    pub fn live_count(&self) -> usize {
        self.live.lock().expect("toast registry poisoned").len()
    }

    /// Cancels every pending toast and removes the ones still mounted.
    ///
    /// Returns how many toasts were cancelled.
    pub fn dispose_all(&self) -> usize {
        let pending: Vec<(ToastId, AbortHandle)> = self
            .live
            .lock()
            .expect("toast registry poisoned")
            .drain()
            .collect();

        for (id, abort) in &pending {
            abort.abort();
            self.surface.remove(*id);
        }

        if !pending.is_empty() {
            debug!(count = pending.len(), "Pending toasts disposed");
        }
        pending.len()
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }
}

impl fmt::Debug for NotificationEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationEmitter")
            .field("timing", &self.timing)
            .field("live", &self.live_count())
            .finish()
    }
}

async fn run_toast(
    id: ToastId,
    surface: Arc<dyn NotificationSurface>,
    timing: NotificationTiming,
    live: LiveToasts,
) {
    sleep(timing.enter_delay).await;
    if surface.set_phase(id, ToastPhase::Shown) {
        sleep(timing.display.saturating_sub(timing.enter_delay)).await;

        if surface.set_phase(id, ToastPhase::Leaving) {
            sleep(timing.exit).await;

            if surface.remove(id) {
                debug!(%id, "Toast removed");
            } else {
                debug!(%id, "Toast already gone at removal");
            }
        } else {
            debug!(%id, "Toast gone before leaving");
        }
    } else {
        debug!(%id, "Toast gone before shown");
    }

    live.lock().expect("toast registry poisoned").remove(&id);
}

// =============================================================================
// Handle
// =============================================================================

/// Owner-side handle to one toast.
pub struct ToastHandle {
    id: ToastId,
    abort: AbortHandle,
    surface: Arc<dyn NotificationSurface>,
    live: LiveToasts,
}

impl ToastHandle {
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// True until the toast finishes or is cancelled.
    pub fn is_pending(&self) -> bool {
        self.live
            .lock()
            .expect("toast registry poisoned")
            .contains_key(&self.id)
    }

    /// True while the element is on the surface.
    pub fn is_mounted(&self) -> bool {
        self.surface.contains(self.id)
    }

    /// Stops the toast's timers and removes its element if still mounted.
    ///
    /// Returns true if this call removed the element.
    pub fn cancel(&self) -> bool {
        self.abort.abort();
        self.live.lock().expect("toast registry poisoned").remove(&self.id);
        let removed = self.surface.remove(self.id);
        debug!(id = %self.id, removed, "Toast cancelled");
        removed
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn emitter() -> (Arc<MemorySurface>, NotificationEmitter) {
        let surface = Arc::new(MemorySurface::new());
        let emitter =
            NotificationEmitter::new(surface.clone(), NotificationTiming::default()).unwrap();
        (surface, emitter)
    }

    #[test]
    fn test_requires_runtime() {
        let surface = Arc::new(MemorySurface::new());
        let err = NotificationEmitter::new(surface, NotificationTiming::default()).unwrap_err();
        assert!(matches!(err, PageError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_timeline() {
        let (surface, emitter) = emitter();

        let handle = emitter.notify("Shirt savatga qo'shildi");
        let id = handle.id();
        assert_eq!(surface.get(id).unwrap().phase, ToastPhase::Entering);

        sleep(ms(50)).await;
        assert_eq!(surface.get(id).unwrap().phase, ToastPhase::Entering);

        sleep(ms(100)).await; // t = 150
        assert_eq!(surface.get(id).unwrap().phase, ToastPhase::Shown);

        sleep(ms(2900)).await; // t = 3050
        assert_eq!(surface.get(id).unwrap().phase, ToastPhase::Leaving);
        assert!(handle.is_pending());

        sleep(ms(500)).await; // t = 3550
        assert!(surface.get(id).is_none());
        assert!(!handle.is_mounted());
        assert_eq!(surface.removed_total(), 1);
        assert!(!handle.is_pending());
        assert_eq!(emitter.live_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_toasts_are_independent() {
        let (surface, emitter) = emitter();

        let first = emitter.notify("Shirt savatga qo'shildi");
        sleep(ms(1000)).await;
        let second = emitter.notify("Hat savatga qo'shildi");
        assert_eq!(emitter.live_count(), 2);

        sleep(ms(2600)).await; // first removed at 3500, second leaves at 4000
        assert!(surface.get(first.id()).is_none());
        assert_eq!(surface.get(second.id()).unwrap().phase, ToastPhase::Shown);

        sleep(ms(1000)).await; // t = 4600, second removed at 4500
        assert!(surface.toasts().is_empty());
        assert_eq!(surface.removed_total(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_only_that_toast() {
        let (surface, emitter) = emitter();

        let first = emitter.notify("a");
        let second = emitter.notify("b");

        sleep(ms(150)).await;
        assert!(first.cancel());
        assert!(!first.cancel());
        assert!(!first.is_pending());

        sleep(ms(3500)).await;
        assert!(surface.get(second.id()).is_none());
        assert_eq!(surface.mounted_total(), 2);
        assert_eq!(surface.removed_total(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_externally_removed_toast_finishes_quietly() {
        let (surface, emitter) = emitter();

        let handle = emitter.notify("a");
        sleep(ms(150)).await;
        surface.wipe();

        sleep(ms(4000)).await;
        assert!(!handle.is_pending());
        assert_eq!(surface.removed_total(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_all_on_teardown() {
        let (surface, emitter) = emitter();

        emitter.notify("a");
        emitter.notify("b");
        sleep(ms(150)).await;

        assert_eq!(emitter.dispose_all(), 2);
        assert!(surface.toasts().is_empty());
        assert_eq!(emitter.live_count(), 0);

        sleep(ms(5000)).await;
        assert_eq!(surface.removed_total(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_still_completes() {
        let (surface, emitter) = emitter();

        drop(emitter.notify("a"));

        sleep(ms(3600)).await;
        assert!(surface.toasts().is_empty());
        assert_eq!(surface.removed_total(), 1);
    }
}
