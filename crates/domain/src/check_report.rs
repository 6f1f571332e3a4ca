use crate::check_mode::CheckMode;
use crate::errors::DomainError;
use crate::ping_record::ComparisonRow;

/// Counts gathered while capturing the baseline for one host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreCheckSummary {
    pub hostname: String,
    pub entries: usize,
    pub reachable: usize,
}

impl PreCheckSummary {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, ping_result: bool) {
        self.entries += 1;
        if ping_result {
            self.reachable += 1;
        }
    }

    pub fn unreachable(&self) -> usize {
        self.entries - self.reachable
    }
}

#[derive(Debug, Clone)]
pub enum HostOutcome {
    PreCheck(PreCheckSummary),
    PostCheck(Vec<ComparisonRow>),
    Failed(DomainError),
}

#[derive(Debug, Clone)]
pub struct HostReport {
    pub hostname: String,
    pub outcome: HostOutcome,
}

impl HostReport {
    pub fn failed(&self) -> Option<&DomainError> {
        match &self.outcome {
            HostOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Everything one run produced, one entry per configured host in order.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub mode: CheckMode,
    pub hosts: Vec<HostReport>,
}

impl CheckReport {
    pub fn new(mode: CheckMode) -> Self {
        Self {
            mode,
            hosts: Vec::new(),
        }
    }

    pub fn push(&mut self, hostname: impl Into<String>, outcome: HostOutcome) {
        self.hosts.push(HostReport {
            hostname: hostname.into(),
            outcome,
        });
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &DomainError)> {
        self.hosts
            .iter()
            .filter_map(|h| h.failed().map(|e| (h.hostname.as_str(), e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn summaries(&self) -> impl Iterator<Item = &PreCheckSummary> {
        self.hosts.iter().filter_map(|h| match &h.outcome {
            HostOutcome::PreCheck(summary) => Some(summary),
            _ => None,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.hosts
            .iter()
            .filter_map(|h| match &h.outcome {
                HostOutcome::PostCheck(rows) => Some(rows),
                _ => None,
            })
            .flatten()
    }

    pub fn regressions(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows().filter(|row| row.regressed())
    }
}
