//! Request handlers.

pub mod audit;
pub mod health;
pub mod titles;

pub use audit::*;
pub use health::*;
pub use titles::*;
