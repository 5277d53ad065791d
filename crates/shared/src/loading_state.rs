use std::fmt;

/// Lifecycle of the manifest that feeds the grid layout.
///
/// There is no retry path: a failed load leaves the grid empty for the rest
/// of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingState::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Loading => write!(f, "Loading"),
            LoadingState::Ready => write!(f, "Ready"),
            LoadingState::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingEvent {
    LoadComplete,
    LoadError(String),
}

impl LoadingEvent {
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            // A late completion must not hide an earlier failure.
            (LoadingEvent::LoadComplete, LoadingState::Error(msg)) => LoadingState::Error(msg),
            (LoadingEvent::LoadComplete, _) => LoadingState::Ready,
            (LoadingEvent::LoadError(msg), _) => LoadingState::Error(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_state_properties() {
        let loading = LoadingState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_ready());
        assert!(!loading.is_error());

        let ready = LoadingState::Ready;
        assert!(!ready.is_loading());
        assert!(ready.is_ready());
        assert!(!ready.is_error());

        let error = LoadingState::Error("Test error".to_string());
        assert!(!error.is_loading());
        assert!(!error.is_ready());
        assert!(error.is_error());
        assert_eq!(error.error_message(), Some("Test error"));
    }

    #[test]
    fn test_loading_events() {
        let state = LoadingState::Loading;

        let new_state = LoadingEvent::LoadComplete.apply_to_state(state.clone());
        assert_eq!(new_state, LoadingState::Ready);

        let new_state = LoadingEvent::LoadError("Failed".to_string()).apply_to_state(state);
        assert_eq!(new_state, LoadingState::Error("Failed".to_string()));
    }

    #[test]
    fn test_completion_keeps_error() {
        let failed = LoadingState::Error("gone".to_string());
        let state = LoadingEvent::LoadComplete.apply_to_state(failed);
        assert_eq!(state.error_message(), Some("gone"));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(LoadingState::Loading.to_string(), "Loading");
        assert_eq!(LoadingState::Ready.to_string(), "Ready");

        let error = LoadingState::Error("Network error".to_string());
        assert_eq!(error.to_string(), "Error: Network error");
    }

    #[test]
    fn test_default_state() {
        assert_eq!(LoadingState::default(), LoadingState::Loading);
    }
}
