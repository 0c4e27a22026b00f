use std::rc::Rc;

use log::error;

use crate::utils::api::FetchError;

/// What a fetched list section shows. Empty and Unavailable are deliberately distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Unavailable,
    Empty,
    Ready(Rc<Vec<T>>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Fold a finished load into a view state. Failures are logged here.
    pub fn from_result(result: Result<Vec<T>, FetchError>, what: &str) -> Self {
        match result {
            Err(e) => {
                error!("Failed to load {}: {}", what, e);
                LoadState::Unavailable
            }
            Ok(entries) if entries.is_empty() => LoadState::Empty,
            Ok(entries) => LoadState::Ready(Rc::new(entries)),
        }
    }

    pub fn entries(&self) -> Option<&Rc<Vec<T>>> {
        match self {
            LoadState::Ready(entries) => Some(entries),
            _ => None,
        }
    }

    /// Value of the `data-state` attribute on the section wrapper.
    pub fn marker(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Unavailable => "unavailable",
            LoadState::Empty => "empty",
            LoadState::Ready(_) => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: LoadState<u8> = LoadState::default();
        assert_eq!(state, LoadState::Loading);
        assert_eq!(state.marker(), "loading");
    }

    #[test]
    fn empty_result_and_failure_are_distinguishable() {
        let empty: LoadState<u8> = LoadState::from_result(Ok(vec![]), "timeline");
        let failed: LoadState<u8> =
            LoadState::from_result(Err(FetchError::Network("offline".into())), "timeline");
        assert_eq!(empty, LoadState::Empty);
        assert_eq!(failed, LoadState::Unavailable);
        assert_ne!(empty.marker(), failed.marker());
    }

    #[test]
    fn malformed_payload_and_bad_status_show_as_unavailable() {
        let malformed: LoadState<u8> =
            LoadState::from_result(Err(FetchError::Malformed("eof".into())), "recipes");
        let status: LoadState<u8> = LoadState::from_result(Err(FetchError::Status(500)), "recipes");
        assert_eq!(malformed, LoadState::Unavailable);
        assert_eq!(status, LoadState::Unavailable);
    }

    #[test]
    fn ready_keeps_order() {
        let state = LoadState::from_result(Ok(vec![3, 1, 2]), "numbers");
        assert_eq!(state.marker(), "ready");
        assert_eq!(state.entries().map(|e| e.as_slice()), Some(&[3, 1, 2][..]));
    }
}
