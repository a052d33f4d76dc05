//! Pure data structures passed between the services and the workflow.

pub mod package;
pub mod quote;
pub mod validation;

pub use package::*;
pub use quote::*;
pub use validation::*;
