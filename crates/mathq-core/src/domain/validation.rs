use crate::domain::{entities::Layout, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &Layout) -> Result<(), DomainError> {
        layout.validate()
    }
}
