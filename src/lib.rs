pub mod cs;

pub use cs::{error, select};
pub use error::{Error, Result};
