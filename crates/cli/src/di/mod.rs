mod network;
mod repositories;
mod use_cases;

pub use network::NetworkServices;
pub use repositories::Repositories;
pub use use_cases::UseCases;
