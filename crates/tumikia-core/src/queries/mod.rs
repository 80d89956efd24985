pub mod dashboard;
pub mod record_queries;

pub use dashboard::{dashboard_summary, report_summary, DashboardSummary, ReportSummary};
pub use record_queries::{filter_records, recent_registrations, RecordFilters};
