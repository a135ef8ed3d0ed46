//! Group-protocol checks
//!
//! "Roll cage" for constraint-group membership:
//!
//! In Debug mode: a violation fails fast with `InvalidGroupState`
//! In Release mode: the violation is logged and tolerated as a no-op
//!
//! Usage:
//! ```rust
//! use shape_dynamics::core::error::GroupViolation;
//! use shape_dynamics::core::protocol::enforce;
//! use shape_dynamics::domain::BodyId;
//! use shape_dynamics::systems::constraints::ConstraintGroup;
//!
//! let res = enforce(BodyId(1), ConstraintGroup::Gravity, GroupViolation::NotSuspended);
//! assert_eq!(res.is_err(), cfg!(debug_assertions));
//! ```

use crate::core::error::{GroupViolation, PlaygroundError};
use crate::domain::BodyId;
use crate::systems::constraints::ConstraintGroup;

/// Report a membership violation.
///
/// - Debug: returns `Err(InvalidGroupState)` so tests catch coordination bugs
/// - Release: warns and returns `Ok(())`, the caller skips the offending group
pub fn enforce(
    body: BodyId,
    group: ConstraintGroup,
    violation: GroupViolation,
) -> Result<(), PlaygroundError> {
    #[cfg(debug_assertions)]
    {
        Err(PlaygroundError::InvalidGroupState {
            body,
            group,
            violation,
        })
    }
    #[cfg(not(debug_assertions))]
    {
        log::warn!(
            "tolerating group violation for body {} in {:?}: {}",
            body,
            group,
            violation
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn debug_build_fails_fast() {
        let err = enforce(BodyId(7), ConstraintGroup::Density, GroupViolation::NotSuspended)
            .unwrap_err();
        match err {
            PlaygroundError::InvalidGroupState { body, group, violation } => {
                assert_eq!(body, BodyId(7));
                assert_eq!(group, ConstraintGroup::Density);
                assert_eq!(violation, GroupViolation::NotSuspended);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn release_build_tolerates() {
        assert!(enforce(BodyId(7), ConstraintGroup::Gravity, GroupViolation::AlreadySuspended).is_ok());
    }
}
