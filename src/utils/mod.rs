//! Small helpers shared by the library, demos and benches.

mod logging;

pub use logging::setup_logger;
