use super::{NetworkServices, Repositories};
use jping_application::use_cases::{
    CheckSettings, RunChecksUseCase, RunPostCheckUseCase, RunPreCheckUseCase,
};
use jping_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub run_checks: Arc<RunChecksUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, network: &NetworkServices) -> Self {
        let settings = CheckSettings::from_config(config);

        let pre_check = Arc::new(RunPreCheckUseCase::new(
            network.connector.clone(),
            repos.ping_record.clone(),
            settings.clone(),
        ));
        let post_check = Arc::new(RunPostCheckUseCase::new(
            network.connector.clone(),
            repos.ping_record.clone(),
            settings,
        ));

        Self {
            run_checks: Arc::new(RunChecksUseCase::new(pre_check, post_check)),
        }
    }
}
