//! Errors surfaced by the focus list engine.

/// Internal-consistency failures of the focus list.
///
/// Boundary overshoot is never reported here: out-of-range scroll amounts and
/// positions are clamped instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusListError {
    /// The center finder found no central slot among the materialized ones.
    CentralSlotNotFound { materialized: usize },
    /// A window slot index outside the materialized window.
    SlotIndexOutOfRange { index: usize, materialized: usize },
}

impl std::fmt::Display for FocusListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusListError::CentralSlotNotFound { materialized } => {
                write!(f, "can't find central slot among {materialized} materialized slots")
            }
            FocusListError::SlotIndexOutOfRange {
                index,
                materialized,
            } => {
                write!(
                    f,
                    "slot index {index} out of range; {materialized} slots materialized"
                )
            }
        }
    }
}

impl std::error::Error for FocusListError {}
