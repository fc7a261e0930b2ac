use crate::error::Result;
use crate::local_storage::workbook_codec;
use crate::models::IssueRecord;

pub const EXPORT_FILE_NAME: &str = "technical_issue_log.xlsx";
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A downloadable workbook built from a record set.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_records(records: &[IssueRecord]) -> Result<Self> {
        Ok(ExportArtifact {
            file_name: EXPORT_FILE_NAME,
            mime_type: XLSX_MIME_TYPE,
            bytes: export_records(records)?,
        })
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// Same layout as the backing store, so exports load back through the store parser.
pub fn export_records(records: &[IssueRecord]) -> Result<Vec<u8>> {
    workbook_codec::encode_records(records)
}
