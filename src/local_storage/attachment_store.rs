use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};

/// Extensions the upload form accepts. Checked by the HTTP layer before
/// files reach the store.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["pdf", "png", "jpg", "jpeg", "docx", "xlsx"];

pub fn is_allowed_attachment(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// An uploaded file as received from the form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Stores attachments under `{root}/{ship}_{date}/{file name}`.
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AttachmentStore { root: root.into() }
    }

    pub fn folder_for(&self, ship_name: &str, issue_date: &str) -> PathBuf {
        self.root.join(folder_name(ship_name, issue_date))
    }

    pub fn attachment_path(&self, ship_name: &str, issue_date: &str, file_name: &str) -> PathBuf {
        self.folder_for(ship_name, issue_date).join(file_name)
    }

    /// Writes each file and returns the resulting paths in input order.
    ///
    /// Existing files with the same name in the folder are overwritten.
    pub fn persist(
        &self,
        files: &[UploadedFile],
        ship_name: &str,
        issue_date: &str,
    ) -> Result<Vec<PathBuf>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let name = folder_name(ship_name, issue_date);
        if !is_single_component(&name) {
            return Err(AppError::AttachmentWriteFailed(format!(
                "Invalid folder name: {}",
                name
            )));
        }
        if let Some(bad) = files.iter().find(|f| !is_single_component(&f.file_name)) {
            return Err(AppError::AttachmentWriteFailed(format!(
                "Invalid file name: {}",
                bad.file_name
            )));
        }

        let folder = self.folder_for(ship_name, issue_date);
        fs::create_dir_all(&folder).map_err(|e| {
            AppError::AttachmentWriteFailed(format!("{}: {}", folder.display(), e))
        })?;

        let mut saved = Vec::with_capacity(files.len());
        for file in files {
            let path = folder.join(&file.file_name);
            fs::write(&path, &file.bytes).map_err(|e| {
                AppError::AttachmentWriteFailed(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), bytes = file.bytes.len(), "Saved attachment");
            saved.push(path);
        }

        Ok(saved)
    }
}

fn folder_name(ship_name: &str, issue_date: &str) -> String {
    format!("{}_{}", ship_name, issue_date)
}

fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
