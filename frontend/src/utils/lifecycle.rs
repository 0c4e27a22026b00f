use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use web_sys::{AbortController, AbortSignal};

/// Liveness token shared between a mounted view and its async callbacks.
#[derive(Debug, Clone)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Hand `value` to `apply` only while the view is mounted. Returns whether it was applied.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }

    /// Mark the view as gone. Affects every clone.
    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// One in-flight load owned by a mount effect: a liveness flag plus the abort
/// controller for its request.
pub struct InFlight {
    flag: MountFlag,
    controller: Option<AbortController>,
}

impl InFlight {
    pub fn start() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                warn!("AbortController unavailable, request cannot be cancelled: {:?}", e);
                None
            }
        };
        Self {
            flag: MountFlag::new(),
            controller,
        }
    }

    pub fn flag(&self) -> MountFlag {
        self.flag.clone()
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    /// Drop the completion and abort the request if it has not finished.
    pub fn cancel(self) {
        self.flag.release();
        if let Some(controller) = self.controller {
            controller.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_live_until_released() {
        let flag = MountFlag::new();
        assert!(flag.is_live());
        flag.release();
        assert!(!flag.is_live());
    }

    #[test]
    fn release_is_seen_by_every_clone() {
        let flag = MountFlag::new();
        let held_by_callback = flag.clone();
        flag.release();
        assert!(!held_by_callback.is_live());
    }

    #[test]
    fn completion_after_release_is_not_applied() {
        let flag = MountFlag::new();
        let completion = flag.clone();
        let mut applied = Vec::new();
        assert!(completion.deliver(1, |v| applied.push(v)));
        flag.release();
        assert!(!completion.deliver(2, |v| applied.push(v)));
        assert_eq!(applied, vec![1]);
    }
}
