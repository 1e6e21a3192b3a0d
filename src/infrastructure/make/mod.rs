//! Make platform client implementations

mod simulated;

pub use simulated::{PreparedRequest, SimulatedMakeClient, DEFAULT_MAKE_BASE_URL};
