//! Single file copy via a fixed-size transfer buffer.
//!
//! This module provides [`copy_file`], which streams the source into the
//! destination through a reusable buffer of
//! [`CopyOptions::buffer_size`](crate::CopyOptions) bytes. The whole file
//! is never held in memory at once.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Copy a single file byte for byte.
///
/// Opens `src` for reading, opens `dst` for writing (created if absent,
/// truncated if present), then transfers all bytes through a fixed-size
/// buffer until the source is exhausted. Both handles are released on
/// every exit path.
///
/// The destination ends up as the exact byte-for-byte concatenation of
/// all reads performed, in order; on success its length equals the
/// number of bytes read from the source.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `options` - Copy options
///
/// # Returns
///
/// The total number of bytes transferred.
///
/// # Errors
///
/// Returns an error identifying the failing phase:
/// - Source cannot be opened ([`Error::OpenSource`]); the destination
///   is not created or modified
/// - Source is a directory ([`Error::SourceIsDirectory`])
/// - Destination cannot be opened ([`Error::OpenDest`])
/// - A read or write fails mid-transfer ([`Error::Read`],
///   [`Error::Write`]); the destination is left partially written
///   unless `options.remove_partial` is set
/// - The final sync fails ([`Error::Sync`], only with `options.fsync`)
///
/// # Example
///
/// ```no_run
/// use bufcopy::{copy_file, CopyOptions};
/// use std::path::Path;
///
/// let options = CopyOptions::default();
/// let bytes = copy_file(Path::new("data.bin"), Path::new("data.bak"), &options)?;
/// println!("copied {bytes} bytes");
/// # Ok::<(), bufcopy::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    // Reject directories up front; on Linux, opening a directory
    // read-only succeeds and the failure would only surface as a
    // confusing EISDIR mid-loop.
    let src_meta = fs::metadata(src).map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;
    if src_meta.is_dir() {
        return Err(Error::SourceIsDirectory(src.to_path_buf()));
    }

    let mut reader = File::open(src).map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    // The source handle is dropped before this error propagates.
    let mut writer = File::create(dst).map_err(|source| Error::OpenDest {
        path: dst.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        buffer_size = options.buffer_size,
        "starting copy"
    );

    // A zero-capacity buffer reads zero bytes and would end the loop
    // with an empty destination; clamp like the options builder does.
    let mut buf = vec![0u8; options.buffer_size.max(1)];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                discard_partial(dst, options);
                return Err(Error::Read {
                    path: src.to_path_buf(),
                    bytes_copied: total,
                    source,
                });
            }
        };

        // write_all loops over short writes and fails with WriteZero if
        // the destination stops accepting data, so a success here means
        // every byte read has landed in the destination.
        if let Err(source) = writer.write_all(&buf[..n]) {
            discard_partial(dst, options);
            return Err(Error::Write {
                path: dst.to_path_buf(),
                bytes_copied: total,
                source,
            });
        }

        total += n as u64;
    }

    if options.fsync {
        if let Err(source) = writer.sync_all() {
            discard_partial(dst, options);
            return Err(Error::Sync {
                path: dst.to_path_buf(),
                source,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(dst = %dst.display(), bytes = total, "copy complete");

    Ok(total)
}

/// Remove the destination after a mid-transfer failure, if configured.
///
/// Removal errors are ignored; the transfer error is the one worth
/// reporting.
fn discard_partial(dst: &Path, options: &CopyOptions) {
    if options.remove_partial {
        let _ = fs::remove_file(dst);
    }
}

// =============================================================================
// Tests
// =============================================================================
