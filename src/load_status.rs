use serde::Serialize;

/// Progress values closer than this are treated as the same state. The
/// engine's progress estimate is a floating signal that emits near-duplicate
/// values; publishing each one would thrash the overlay renderer.
pub(crate) const PROGRESS_EPSILON: f64 = 1e-4;

/// Lifecycle of a single page-load attempt. Exactly one variant is active at
/// any instant; the controller is the only writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub(crate) enum LoadStatus {
    Standby,
    Progressing { progress: f64 },
    Finished,
    Failure { reason: String },
    NoConnection,
}

impl LoadStatus {
    /// Equality with an epsilon tolerance on `Progressing` payloads.
    /// `Failure` reasons compare by string; other same-variant pairs are
    /// always equivalent.
    pub(crate) fn is_equivalent(&self, other: &LoadStatus) -> bool {
        match (self, other) {
            (LoadStatus::Standby, LoadStatus::Standby)
            | (LoadStatus::Finished, LoadStatus::Finished)
            | (LoadStatus::NoConnection, LoadStatus::NoConnection) => true,
            (LoadStatus::Progressing { progress: a }, LoadStatus::Progressing { progress: b }) => {
                (a - b).abs() < PROGRESS_EPSILON
            }
            (LoadStatus::Failure { reason: a }, LoadStatus::Failure { reason: b }) => a == b,
            _ => false,
        }
    }

    pub(crate) fn progress(&self) -> Option<f64> {
        match self {
            LoadStatus::Progressing { progress } => Some(*progress),
            _ => None,
        }
    }

    pub(crate) fn is_successful(&self) -> bool {
        matches!(self, LoadStatus::Finished)
    }

    pub(crate) fn has_error(&self) -> bool {
        matches!(self, LoadStatus::Failure { .. } | LoadStatus::NoConnection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_duplicate_progress_values_are_equivalent() {
        let a = LoadStatus::Progressing { progress: 0.50001 };
        let b = LoadStatus::Progressing { progress: 0.50002 };
        assert!(a.is_equivalent(&b));
    }

    #[test]
    fn distinct_progress_values_are_not_equivalent() {
        let a = LoadStatus::Progressing { progress: 0.5 };
        let b = LoadStatus::Progressing { progress: 0.6 };
        assert!(!a.is_equivalent(&b));
    }

    #[test]
    fn failure_equivalence_compares_reasons() {
        let timeout = LoadStatus::Failure {
            reason: "timeout".to_string(),
        };
        let dns = LoadStatus::Failure {
            reason: "dns".to_string(),
        };
        assert!(timeout.is_equivalent(&timeout.clone()));
        assert!(!timeout.is_equivalent(&dns));
    }

    #[test]
    fn cross_variant_pairs_are_never_equivalent() {
        let progressing = LoadStatus::Progressing { progress: 1.0 };
        assert!(!progressing.is_equivalent(&LoadStatus::Finished));
        assert!(!LoadStatus::NoConnection.is_equivalent(&LoadStatus::Failure {
            reason: "offline".to_string(),
        }));
        assert!(!LoadStatus::Standby.is_equivalent(&LoadStatus::Finished));
    }

    #[test]
    fn progress_accessor_is_only_populated_while_progressing() {
        assert_eq!(
            LoadStatus::Progressing { progress: 0.3 }.progress(),
            Some(0.3)
        );
        assert_eq!(LoadStatus::Standby.progress(), None);
        assert_eq!(LoadStatus::Finished.progress(), None);
    }

    #[test]
    fn success_and_error_predicates() {
        assert!(LoadStatus::Finished.is_successful());
        assert!(!LoadStatus::NoConnection.is_successful());
        assert!(LoadStatus::NoConnection.has_error());
        assert!(LoadStatus::Failure {
            reason: "timeout".to_string()
        }
        .has_error());
        assert!(!LoadStatus::Progressing { progress: 0.2 }.has_error());
    }

    #[test]
    fn serializes_to_tagged_camel_case_payloads() {
        let progressing = LoadStatus::Progressing { progress: 0.25 };
        assert_eq!(
            serde_json::to_string(&progressing).expect("serialize progressing"),
            r#"{"state":"progressing","progress":0.25}"#
        );
        assert_eq!(
            serde_json::to_string(&LoadStatus::NoConnection).expect("serialize offline"),
            r#"{"state":"noConnection"}"#
        );
    }
}
