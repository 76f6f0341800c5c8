//! Error types for bufcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during a copy operation, and the [`Result`] type alias.
//!
//! Every variant names the phase of the copy that failed (opening the
//! source, opening the destination, reading, writing, syncing) and carries
//! the offending path plus the underlying OS error, so callers can report
//! exactly which step went wrong.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bufcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a copy operation.
///
/// Variants are ordered by the phase in which they can occur. A copy
/// progresses strictly from opening the source, to opening the
/// destination, to the transfer loop; once a phase fails the whole
/// operation fails with no retry.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open the source file for reading.
    ///
    /// When this error is returned, the destination has not been
    /// created or modified.
    #[error("failed to open source file {path}: {source}")]
    OpenSource {
        /// The source path that could not be opened
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source path refers to a directory, not a file.
    #[error("source is a directory: {0}")]
    SourceIsDirectory(PathBuf),

    /// Failed to open (create/truncate) the destination file for writing.
    ///
    /// The source handle has already been released when this is returned.
    #[error("failed to open destination file {path}: {source}")]
    OpenDest {
        /// The destination path that could not be opened
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A read from the source failed mid-transfer.
    ///
    /// The destination may be left partially written unless
    /// [`CopyOptions::remove_partial`](crate::CopyOptions) was set.
    #[error("failed to read from {path} after {bytes_copied} bytes: {source}")]
    Read {
        /// The source path being read
        path: PathBuf,
        /// Bytes successfully transferred before the failure
        bytes_copied: u64,
        /// Underlying error
        source: io::Error,
    },

    /// A write to the destination failed mid-transfer.
    ///
    /// Short writes are converted to hard errors
    /// (`io::ErrorKind::WriteZero`) rather than silently dropping bytes,
    /// so this variant also covers a device that stopped accepting data.
    #[error("failed to write to {path} after {bytes_copied} bytes: {source}")]
    Write {
        /// The destination path being written
        path: PathBuf,
        /// Bytes successfully transferred before the failure
        bytes_copied: u64,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to sync the destination to disk after the transfer.
    ///
    /// Only possible when [`CopyOptions::fsync`](crate::CopyOptions)
    /// is enabled.
    #[error("failed to sync destination file {path}: {source}")]
    Sync {
        /// The destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// Whether the destination file may have been created or modified
    /// by the failed operation.
    ///
    /// `false` for failures that happen before the destination is
    /// opened, `true` for failures during or after the transfer loop.
    pub fn destination_touched(&self) -> bool {
        match self {
            Self::OpenSource { .. } | Self::SourceIsDirectory(_) | Self::OpenDest { .. } => false,
            Self::Read { .. } | Self::Write { .. } | Self::Sync { .. } => true,
        }
    }
}
