use super::run_post_check::RunPostCheckUseCase;
use super::run_pre_check::RunPreCheckUseCase;
use jping_domain::{CheckMode, CheckReport, HostOutcome, HostTarget};
use std::sync::Arc;
use tracing::{error, info};

/// Use case: run one check mode across every configured router
///
/// Routers are processed one at a time in configuration order. A router that
/// fails is recorded in the report and the run moves on to the next one.
pub struct RunChecksUseCase {
    pre_check: Arc<RunPreCheckUseCase>,
    post_check: Arc<RunPostCheckUseCase>,
}

impl RunChecksUseCase {
    pub fn new(pre_check: Arc<RunPreCheckUseCase>, post_check: Arc<RunPostCheckUseCase>) -> Self {
        Self {
            pre_check,
            post_check,
        }
    }

    pub async fn execute(&self, mode: CheckMode, targets: &[HostTarget]) -> CheckReport {
        info!(mode = %mode, hosts = targets.len(), "Starting run");

        let mut report = CheckReport::new(mode);
        for target in targets {
            info!(host = %target.hostname, vendor = %target.vendor, "Processing host");

            let outcome = match mode {
                CheckMode::Pre => self
                    .pre_check
                    .execute(target)
                    .await
                    .map(HostOutcome::PreCheck),
                CheckMode::Post => self
                    .post_check
                    .execute(target)
                    .await
                    .map(HostOutcome::PostCheck),
            };

            let outcome = outcome.unwrap_or_else(|e| {
                error!(host = %target.hostname, error = %e, "Host check failed");
                HostOutcome::Failed(e)
            });
            report.push(target.hostname.as_str(), outcome);
        }

        info!(
            mode = %mode,
            hosts = report.hosts.len(),
            failed = report.failures().count(),
            "Run finished"
        );
        report
    }
}
