pub mod cleaning;
pub mod error;
pub mod review;
pub mod volume;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
