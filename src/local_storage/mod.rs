pub mod attachment_store;
pub mod issue_tables;
pub mod record_store;
pub mod workbook_codec;

pub use attachment_store::{AttachmentStore, UploadedFile};
pub use issue_tables::IssueTable;
pub use record_store::RecordStore;
