//! Fetch lifecycle status shared by the bulk and per-code machines.

use serde::{Deserialize, Serialize};

/// `Idle → Loading → {Succeeded, Failed}`; both terminal states may re-enter `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }

    /// True once a fetch has finished, either way.
    pub fn is_settled(self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&FetchStatus::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");
    }

    #[test]
    fn test_settled_states() {
        assert!(!FetchStatus::Idle.is_settled());
        assert!(!FetchStatus::Loading.is_settled());
        assert!(FetchStatus::Succeeded.is_settled());
        assert!(FetchStatus::Failed.is_settled());
    }
}
