use thiserror::Error;

/// Errors raised while turning form state into request payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill all fields to predict FargoRate: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
