use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::local_storage::{AttachmentStore, RecordStore, UploadedFile};
use crate::models::{GridRow, IssueRecord, NewIssue};
use crate::services::export::ExportArtifact;
use crate::services::filter::{FilterOptions, Selections, filter_options, filter_records};

/// Entry points the front-end calls. All methods block on file I/O.
pub struct IssueService {
    record_store: Arc<RecordStore>,
    attachment_store: Arc<AttachmentStore>,
}

impl IssueService {
    pub fn new(config: &Config) -> Self {
        Self::with_stores(
            Arc::new(RecordStore::new(config.store_path.clone())),
            Arc::new(AttachmentStore::new(config.upload_dir.clone())),
        )
    }

    pub fn with_stores(record_store: Arc<RecordStore>, attachment_store: Arc<AttachmentStore>) -> Self {
        Self {
            record_store,
            attachment_store,
        }
    }

    pub fn load_store(&self) -> Result<Vec<IssueRecord>> {
        self.record_store.load()
    }

    /// Saves the attachments, then appends the record that points at them.
    ///
    /// Files written before a failed append are left on disk.
    pub fn submit(&self, issue: NewIssue, files: &[UploadedFile]) -> Result<IssueRecord> {
        issue.validate()?;

        let issue_date = issue.issue_date_str();
        let saved = self
            .attachment_store
            .persist(files, &issue.ship_name, &issue_date)?;
        let paths: Vec<String> = saved.iter().map(|p| p.display().to_string()).collect();

        let record = issue.into_record(&paths);
        self.record_store.append(&record)?;

        tracing::info!(
            ship = %record.ship_name,
            date = %record.issue_logged_date,
            attachments = paths.len(),
            "Issue logged"
        );
        Ok(record)
    }

    /// Loads the log, applies the selections and numbers the remaining rows.
    pub fn view(&self, selections: &Selections) -> Result<Vec<GridRow>> {
        let records = self.record_store.load()?;
        Ok(GridRow::number(filter_records(&records, selections)))
    }

    pub fn filter_options(&self) -> Result<FilterOptions> {
        let records = self.record_store.load()?;
        Ok(filter_options(&records))
    }

    pub fn export(&self, selections: &Selections) -> Result<ExportArtifact> {
        let records = self.record_store.load()?;
        ExportArtifact::from_records(&filter_records(&records, selections))
    }
}
