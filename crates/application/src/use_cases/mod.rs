pub mod checks;

// Re-export use cases
pub use checks::{CheckSettings, RunChecksUseCase, RunPostCheckUseCase, RunPreCheckUseCase};
