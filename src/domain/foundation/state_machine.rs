use super::ValidationError;

/// A status enum with a fixed set of allowed moves.
///
/// Implementors list each state's successors; everything else is derived.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }

    /// Returns `target` if the move is allowed, otherwise a `status` validation error.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }
}
