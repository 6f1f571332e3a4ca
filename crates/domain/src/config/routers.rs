use serde::{Deserialize, Serialize};

/// A `[[routers]]` entry as written in the config file.
///
/// The vendor stays a plain string here so that an unknown value surfaces as
/// a validation error naming the router instead of a generic parse error.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouterConfig {
    pub hostname: String,
    pub vendor: String,
}
