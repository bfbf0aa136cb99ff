//! External service clients.

pub mod describe;

pub use describe::{DescribeClient, DescribeError};
