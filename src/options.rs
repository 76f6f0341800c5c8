//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior.
//!
//! # Example
//!
//! ```
//! use bufcopy::CopyOptions;
//!
//! // Create options with builder pattern
//! let options = CopyOptions::default()
//!     .with_buffer_size(64 * 1024)
//!     .with_fsync();
//! ```

/// Default size of the transfer buffer in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `buffer_size` | 1024 | Transfer buffer capacity in bytes |
/// | `fsync` | `false` | Sync destination to disk after the copy |
/// | `remove_partial` | `false` | Delete the destination on mid-copy failure |
///
/// # Example
///
/// ```
/// use bufcopy::CopyOptions;
///
/// let options = CopyOptions::default()
///     .with_buffer_size(128 * 1024)   // Fewer syscalls on large files
///     .with_remove_partial();         // No half-written destination
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Capacity of the transfer buffer in bytes (default: 1024)
    ///
    /// Buffer size affects syscall count and throughput, not
    /// correctness. Larger buffers help on large files; the default
    /// keeps memory usage negligible.
    pub buffer_size: usize,

    /// Whether to sync the destination to disk after writing (default: false)
    ///
    /// This ensures durability before success is reported but may slow
    /// down copies.
    pub fsync: bool,

    /// Whether to delete a partially written destination when the copy
    /// fails mid-transfer (default: false)
    ///
    /// By default a failed copy leaves whatever was written so far at
    /// the destination path. Enable this to remove it instead.
    pub remove_partial: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            fsync: false,
            remove_partial: false,
        }
    }
}

impl CopyOptions {
    /// Set the transfer buffer capacity in bytes.
    ///
    /// Value is clamped to at least 1 to prevent a zero-length buffer
    /// from stalling the copy loop.
    #[must_use]
    pub fn with_buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = bytes.max(1);
        self
    }

    /// Sync the destination to disk before reporting success.
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Delete a partially written destination on mid-copy failure.
    #[must_use]
    pub fn with_remove_partial(mut self) -> Self {
        self.remove_partial = true;
        self
    }
}
