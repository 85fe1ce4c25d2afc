//! # Page Surfaces
//!
//! The only parts of the page the cart layer writes to, expressed as
//! injected sinks so the logic runs without a rendering surface.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   🛒 [ 2 ]  ◄──── CountDisplay::show_count(2)                           │
//! │                                                                         │
//! │                          ┌───────────────────────────┐                  │
//! │   NotificationSurface ──►│ Hat savatga qo'shildi     │ (top right)      │
//! │     mount / set_phase /  └───────────────────────────┘                  │
//! │     remove / contains                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `MemoryCountDisplay` and `MemorySurface` keep everything in memory. They
//! back the tests and any headless host.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

// =============================================================================
// Toast Model
// =============================================================================

/// Identity of one toast element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        ToastId(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Animation phase of a mounted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted above the viewport, about to slide in.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding back out; removal follows.
    Leaving,
}

/// A toast element as the surface sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Sinks
// =============================================================================

/// Where toast elements live (the page body).
///
/// Implementations must tolerate calls for ids they no longer hold: those
/// return `false` and change nothing.
pub trait NotificationSurface: Send + Sync {
    /// Appends a new toast element.
    fn mount(&self, toast: ToastView);

    /// Moves a toast to `phase`. Returns false if the element is gone.
    fn set_phase(&self, id: ToastId, phase: ToastPhase) -> bool;

    /// Removes a toast. Returns true only for the call that removed it.
    fn remove(&self, id: ToastId) -> bool;

    fn contains(&self, id: ToastId) -> bool;
}

/// The numeric cart counter next to the cart icon.
pub trait CountDisplay: Send + Sync {
    fn show_count(&self, count: usize);
}

// =============================================================================
// In-Memory Implementations
// =============================================================================

#[derive(Debug, Default)]
struct SurfaceState {
    toasts: Vec<ToastView>,
    mounted: usize,
    removed: usize,
}

/// A notification surface held in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts currently mounted, in mount order.
    pub fn toasts(&self) -> Vec<ToastView> {
        self.state.lock().expect("surface mutex poisoned").toasts.clone()
    }

    pub fn get(&self, id: ToastId) -> Option<ToastView> {
        self.state
            .lock()
            .expect("surface mutex poisoned")
            .toasts
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Messages of the mounted toasts, in mount order.
    pub fn messages(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.message).collect()
    }

    /// Number of toasts ever mounted.
    pub fn mounted_total(&self) -> usize {
        self.state.lock().expect("surface mutex poisoned").mounted
    }

    /// Number of successful `remove` calls.
    pub fn removed_total(&self) -> usize {
        self.state.lock().expect("surface mutex poisoned").removed
    }

    /// Drops every element without going through `remove`, the way unrelated
    /// page code wiping the body would.
    pub fn wipe(&self) {
        self.state.lock().expect("surface mutex poisoned").toasts.clear();
    }
}

impl NotificationSurface for MemorySurface {
    fn mount(&self, toast: ToastView) {
        let mut state = self.state.lock().expect("surface mutex poisoned");
        debug!(id = %toast.id, text = %toast.message, "Toast mounted");
        state.toasts.push(toast);
        state.mounted += 1;
    }

    fn set_phase(&self, id: ToastId, phase: ToastPhase) -> bool {
        let mut state = self.state.lock().expect("surface mutex poisoned");
        match state.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = phase;
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: ToastId) -> bool {
        let mut state = self.state.lock().expect("surface mutex poisoned");
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        let removed = state.toasts.len() != before;
        if removed {
            state.removed += 1;
        }
        removed
    }

    fn contains(&self, id: ToastId) -> bool {
        self.state
            .lock()
            .expect("surface mutex poisoned")
            .toasts
            .iter()
            .any(|t| t.id == id)
    }
}

/// A count display held in memory; remembers every value written.
#[derive(Debug, Default)]
pub struct MemoryCountDisplay {
    history: Mutex<Vec<usize>>,
}

impl MemoryCountDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value shown, if any.
    pub fn current(&self) -> Option<usize> {
        self.history.lock().expect("display mutex poisoned").last().copied()
    }

    pub fn history(&self) -> Vec<usize> {
        self.history.lock().expect("display mutex poisoned").clone()
    }
}

impl CountDisplay for MemoryCountDisplay {
    fn show_count(&self, count: usize) {
        self.history.lock().expect("display mutex poisoned").push(count);
    }
}
