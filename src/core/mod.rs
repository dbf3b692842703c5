pub mod error;

pub use error::{PagerError, Result};
