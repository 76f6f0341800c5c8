//! Builder API for ergonomic copy operations.
//!
//! The builder pattern provides a fluent interface for configuring and
//! executing a copy. This is often more convenient than manually
//! constructing [`CopyOptions`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bufcopy::CopyBuilder;
//!
//! let bytes = CopyBuilder::new("data.db", "data.db.bak").run()?;
//! println!("Copied {bytes} bytes");
//! # Ok::<(), bufcopy::Error>(())
//! ```
//!
//! ## With Options
//!
//! ```no_run
//! use bufcopy::CopyBuilder;
//!
//! let bytes = CopyBuilder::new("data.db", "data.db.bak")
//!     .buffer_size(64 * 1024)  // Fewer syscalls on large files
//!     .fsync()                 // Durable before success is reported
//!     .run()?;
//! # Ok::<(), bufcopy::Error>(())
//! ```

use crate::copy::copy_file;
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a single-file copy.
///
/// # Example
///
/// ```no_run
/// use bufcopy::CopyBuilder;
///
/// let bytes = CopyBuilder::new("/data/records.log", "/backup/records.log")
///     .buffer_size(128 * 1024)
///     .remove_partial()
///     .run()?;
/// # Ok::<(), bufcopy::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses default options (1024-byte buffer, no fsync, partial output
    /// left in place on failure).
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Set the transfer buffer capacity in bytes.
    ///
    /// Default is 1024. Clamped to at least 1.
    #[must_use]
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.options = self.options.with_buffer_size(bytes);
        self
    }

    /// Sync the destination to disk before reporting success.
    ///
    /// This improves durability at the cost of one extra syscall and a
    /// wait for the storage device.
    #[must_use]
    pub fn fsync(mut self) -> Self {
        self.options = self.options.with_fsync();
        self
    }

    /// Delete a partially written destination on mid-copy failure.
    ///
    /// By default, a copy that fails mid-transfer leaves whatever was
    /// written so far at the destination path.
    #[must_use]
    pub fn remove_partial(mut self) -> Self {
        self.options = self.options.with_remove_partial();
        self
    }

    /// Get a reference to the current options.
    ///
    /// Useful for inspection or passing to other functions.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy operation.
    ///
    /// Returns the total number of bytes transferred.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Source doesn't exist or can't be read
    /// - Source is a directory
    /// - Destination can't be created
    /// - I/O error during the transfer
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bufcopy::CopyBuilder;
    ///
    /// let bytes = CopyBuilder::new("src.bin", "dst.bin").run()?;
    /// println!("Copied {bytes} bytes");
    /// # Ok::<(), bufcopy::Error>(())
    /// ```
    pub fn run(self) -> Result<u64> {
        copy_file(&self.src, &self.dst, &self.options)
    }
}
