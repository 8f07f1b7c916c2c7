//! Error conversion glue between layer-specific error types.
//!
//! The domain layer must not depend on service or repository error types, so
//! the `From` impls bridging them live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::upload::UploadParseError;
use crate::repository::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<UploadParseError> for ServiceError {
    fn from(val: UploadParseError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
