/// Base DDD abstractions for the domain layer
use std::fmt::Debug;
use thiserror::Error;

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Debug {}

/// Trait for entities - objects with identity that can change over time
/// Entities are equal if their IDs are equal, regardless of other attributes
///
/// Every record stored inside one of the list keys (`newsItems`, `resources`, ...)
/// is an entity: upserts and deletes address it by this id.
pub trait Entity: Debug {
    type Id: PartialEq + Clone + Debug;

    fn id(&self) -> &Self::Id;
}

/// Trait for domain events - things that have happened in the domain
pub trait DomainEvent: Debug + Clone {
    /// The name/type of the event
    fn event_type(&self) -> &'static str;

    /// The storage key (or page id) the event is about, empty for global signals
    fn aggregate_id(&self) -> String;
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised while building or checking content before it is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The content is well-formed but breaks a page rule (duplicate section ids, ...)
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),
}
