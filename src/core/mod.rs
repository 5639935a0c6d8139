pub mod aggregate;
pub mod error;
pub mod types;

pub use error::{DbError, Result};
pub use types::{Key, Row, Value};
