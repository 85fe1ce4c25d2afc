//! Terminal implementations of the page sinks.

use std::collections::HashMap;
use std::sync::Mutex;

use storefront_page::{CountDisplay, NotificationSurface, ToastId, ToastPhase, ToastView};

/// Prints the cart counter whenever it changes.
#[derive(Debug, Default)]
pub struct TerminalCounter;

impl CountDisplay for TerminalCounter {
    fn show_count(&self, count: usize) {
        println!("[savat] {}", count);
    }
}

/// Prints toast transitions as they happen.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    toasts: Mutex<HashMap<ToastId, String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationSurface for TerminalSurface {
    fn mount(&self, toast: ToastView) {
        println!("[toast +] {}", toast.message);
        self.toasts
            .lock()
            .expect("Surface mutex poisoned")
            .insert(toast.id, toast.message);
    }

    fn set_phase(&self, id: ToastId, phase: ToastPhase) -> bool {
        let toasts = self.toasts.lock().expect("Surface mutex poisoned");
        match toasts.get(&id) {
            Some(message) => {
                if phase == ToastPhase::Shown {
                    println!("[toast] {}", message);
                }
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: ToastId) -> bool {
        match self.toasts.lock().expect("Surface mutex poisoned").remove(&id) {
            Some(message) => {
                println!("[toast -] {}", message);
                true
            }
            None => false,
        }
    }

    fn contains(&self, id: ToastId) -> bool {
        self.toasts
            .lock()
            .expect("Surface mutex poisoned")
            .contains_key(&id)
    }
}
