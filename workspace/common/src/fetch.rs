use std::cell::Cell;
use std::rc::Rc;

/// API fetch state enum
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared flag telling an in-flight request whether its owner is still mounted.
///
/// Clones share the flag: the owner keeps one to call [`MountGuard::unmount`]
/// from its teardown, the request keeps another to deliver its result.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Pass `value` to `set` only while still mounted; returns whether it was delivered.
    pub fn set_if_mounted<T>(&self, value: T, set: impl FnOnce(T)) -> bool {
        if !self.is_mounted() {
            tracing::debug!("discarding result that resolved after unmount");
            return false;
        }
        set(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_state_accessors() {
        let loading = FetchState::<u32>::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let ok = FetchState::Success(7);
        assert_eq!(ok.data(), Some(&7));
        assert!(ok.error().is_none());

        let err = FetchState::<u32>::Error("boom".to_string());
        assert!(!err.is_loading());
        assert_eq!(err.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn test_guard_delivers_while_mounted() {
        let guard = MountGuard::new();
        let slot = RefCell::new(FetchState::<u32>::Loading);

        assert!(guard.set_if_mounted(FetchState::Success(3), |state| *slot.borrow_mut() = state));
        assert_eq!(*slot.borrow(), FetchState::Success(3));
    }

    #[tokio::test]
    async fn test_result_after_unmount_is_dropped() {
        let owner = MountGuard::new();
        let slot = Rc::new(RefCell::new(FetchState::<u32>::Loading));

        let pending = {
            let request = owner.clone();
            let slot = slot.clone();
            async move {
                tokio::task::yield_now().await;
                request.set_if_mounted(FetchState::Success(9), |state| *slot.borrow_mut() = state)
            }
        };

        owner.unmount();
        let delivered = pending.await;

        assert!(!delivered);
        assert_eq!(*slot.borrow(), FetchState::Loading);
    }
}
