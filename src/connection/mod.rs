//! Connection lifecycle management.

mod manager;

pub use manager::{ConnectionManager, Session};
