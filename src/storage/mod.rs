pub mod column;

pub use column::Column;
