use serde::Serialize;
use utoipa::ToSchema;

/// A periodic operations report.
///
/// Like projects, report content comes from an upstream system; the sample
/// snapshot here exists to exercise the manager/admin gate.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportSummary {
    pub title: String,
    pub period: String,
    pub open_incidents: u32,
    pub resolved_incidents: u32,
}
