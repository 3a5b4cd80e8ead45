pub use driver::{Driver, DEFAULT_SOURCE};
pub use result::{DriverErr, DriverErrKind, DriverResult};

mod driver;
mod result;
