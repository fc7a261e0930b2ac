pub mod export;
pub mod filter;
pub mod issue_service;

pub use export::{ExportArtifact, export_records};
pub use filter::{FilterOptions, Selections, filter_options, filter_records};
pub use issue_service::IssueService;
