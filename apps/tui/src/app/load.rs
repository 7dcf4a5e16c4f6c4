use std::fmt;

/// Lifecycle of one remote resource (wells, a well's detail, its curve...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Start,
    Succeed,
    Fail(String),
    Reset,
}

impl fmt::Display for LoadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Succeed => write!(f, "Succeed"),
            Self::Fail(msg) => write!(f, "Fail({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransitionError {
    pub from: LoadState,
    pub event: LoadEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

impl LoadState {
    /// A result only lands while loading; anything else is a late response
    /// for a request that was reset or superseded.
    pub fn apply(&self, event: &LoadEvent) -> Result<Self, StateTransitionError> {
        match (self, event) {
            (_, LoadEvent::Start) => Ok(Self::Loading),
            (Self::Loading, LoadEvent::Succeed) => Ok(Self::Loaded),
            (Self::Loading, LoadEvent::Fail(msg)) => Ok(Self::Failed(msg.clone())),
            (_, LoadEvent::Reset) => Ok(Self::Idle),
            _ => Err(StateTransitionError {
                from: self.clone(),
                event: event.clone(),
            }),
        }
    }

    /// In-place variant of [`apply`](Self::apply).
    pub fn transition(&mut self, event: &LoadEvent) -> Result<(), StateTransitionError> {
        *self = self.apply(event)?;
        Ok(())
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() -> Result<(), StateTransitionError> {
        let mut state = LoadState::default();
        state.transition(&LoadEvent::Start)?;
        assert!(state.is_loading());
        state.transition(&LoadEvent::Succeed)?;
        assert_eq!(state, LoadState::Loaded);
        Ok(())
    }

    #[test]
    fn failure_keeps_message() -> Result<(), StateTransitionError> {
        let mut state = LoadState::Loading;
        state.transition(&LoadEvent::Fail("boom".to_string()))?;
        assert_eq!(state.error(), Some("boom"));
        Ok(())
    }

    #[test]
    fn late_result_after_reset_is_rejected() {
        let mut state = LoadState::Loading;
        assert!(state.transition(&LoadEvent::Reset).is_ok());
        let err = state.transition(&LoadEvent::Succeed);
        assert_eq!(
            err,
            Err(StateTransitionError {
                from: LoadState::Idle,
                event: LoadEvent::Succeed,
            })
        );
        assert_eq!(state, LoadState::Idle);
    }

    #[test]
    fn restart_is_allowed_from_any_state() -> Result<(), StateTransitionError> {
        for from in [
            LoadState::Idle,
            LoadState::Loading,
            LoadState::Loaded,
            LoadState::Failed("x".to_string()),
        ] {
            assert_eq!(from.apply(&LoadEvent::Start)?, LoadState::Loading);
        }
        Ok(())
    }
}
