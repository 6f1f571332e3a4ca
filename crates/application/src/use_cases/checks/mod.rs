pub mod run_checks;
pub mod run_post_check;
pub mod run_pre_check;
mod session;
pub mod settings;

pub use run_checks::RunChecksUseCase;
pub use run_post_check::RunPostCheckUseCase;
pub use run_pre_check::RunPreCheckUseCase;
pub use settings::CheckSettings;
