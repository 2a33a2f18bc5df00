//! Local disk file store
//!
//! Files land in a single flat directory. Each stored name has the form
//! `<upload-epoch-millis>-<original-filename>`; the millisecond prefix is the
//! only collision guard, backed by exclusive creation so an existing file is
//! never overwritten.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

/// Attempts at finding a free name before giving up
const MAX_NAME_ATTEMPTS: i64 = 16;

/// Fallback for filenames that sanitize to nothing
const UNNAMED: &str = "unnamed";

/// Local filesystem store for application attachments
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    /// Create the store, creating the upload directory if it is missing
    pub async fn new(config: StorageConfig) -> Result<Self, AppError> {
        fs::create_dir_all(&config.upload_dir).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create upload directory '{}': {}",
                config.upload_dir.display(),
                e
            ))
        })?;

        info!("Upload directory ready: {}", config.upload_dir.display());

        Ok(Self {
            root: config.upload_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `data` under a fresh timestamped name and return that name
    pub async fn store(&self, original_filename: &str, data: &[u8]) -> Result<String, AppError> {
        let base_millis = Utc::now().timestamp_millis();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = stored_filename(base_millis + attempt, original_filename);
            let path = self.root.join(&name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(AppError::Storage(format!(
                        "Failed to create '{}': {}",
                        name, e
                    )))
                }
            };

            if let Err(e) = write_all(&mut file, data).await {
                drop(file);
                let _ = fs::remove_file(&path).await;
                return Err(AppError::Storage(format!("Failed to write '{}': {}", name, e)));
            }

            debug!("Stored file {} ({} bytes)", name, data.len());
            return Ok(name);
        }

        Err(AppError::Storage(format!(
            "Could not find a free name for '{}'",
            original_filename
        )))
    }

    /// Delete a stored file by name; a missing file is not an error
    pub async fn remove(&self, name: &str) -> Result<(), AppError> {
        match fs::remove_file(self.root.join(name)).await {
            Ok(()) => {
                debug!("Removed stored file {}", name);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove '{}': {}",
                name, e
            ))),
        }
    }
}

async fn write_all(file: &mut fs::File, data: &[u8]) -> std::io::Result<()> {
    file.write_all(data).await?;
    file.flush().await
}

/// Build the on-disk name for an upload made at `millis`
pub fn stored_filename(millis: i64, original_filename: &str) -> String {
    format!("{}-{}", millis, sanitize_filename(original_filename))
}

/// Reduce a client-supplied filename to a safe single path component
pub fn sanitize_filename(original: &str) -> String {
    let last = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        UNNAMED.to_string()
    } else {
        cleaned.to_string()
    }
}
