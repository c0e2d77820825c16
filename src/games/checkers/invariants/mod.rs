//! First-class invariants for checkers.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and are checked after every accepted move
//! in debug builds.

/// A property of a state `S` that every accepted move preserves.
pub trait Invariant<S> {
    /// True while the property holds.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;

    /// `holds` as a `Result`, naming the property on failure.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// A broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Violation carrying `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one line for error messages.
pub fn summarize(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Invariants checked as a group, reporting every failure at once.
pub trait InvariantSet<S> {
    /// Runs every member check and collects the violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [I1::check(state), I2::check(state), I3::check(state)]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod dark_squares;
pub mod piece_budget;
pub mod turn_consistent;

pub use dark_squares::DarkSquaresInvariant;
pub use piece_budget::PieceBudgetInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All checkers invariants as a composable set.
pub type CheckersInvariants = (
    DarkSquaresInvariant,
    PieceBudgetInvariant,
    TurnConsistentInvariant,
);
