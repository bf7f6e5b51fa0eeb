//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod text;
pub mod username;
pub mod validation;

pub use pagination::{Pagination, PaginationParams};
pub use text::{CardText, GoalText};
pub use username::Username;
pub use validation::ValidationError;
