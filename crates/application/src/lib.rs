//! jping application layer: ports and the pre/post check use cases.
pub mod ports;
pub mod use_cases;
