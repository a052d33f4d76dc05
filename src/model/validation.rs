/// Outcome of a single business-rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// The check failed; carries the message shown to the user.
    Invalid(String),
}

impl ValidationResult {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ValidationResult::Invalid(reason.into())
    }
}
