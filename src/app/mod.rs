pub mod driver;
pub mod session;
pub mod shutdown;

pub use driver::{drive, DriveOptions, StopReason};
pub use session::Session;
pub use shutdown::ShutdownManager;
