//! # bufcopy
//!
//! Buffered, byte-for-byte single file copying for Rust.
//!
//! ## Core Features
//!
//! - **Fixed-memory streaming**: transfers files of any size through a
//!   reusable buffer (1024 bytes by default), never loading the whole
//!   file into memory
//! - **Phase-aware errors**: every failure names the step that failed
//!   (open source, open destination, read, write, sync) with the path
//!   and OS error attached
//! - **No silent truncation**: short writes are hard errors, so a
//!   successful copy always wrote exactly what was read
//! - **Scoped handles**: source and destination handles are released on
//!   every exit path, success or failure
//! - **Configurable buffer**: tune buffer capacity for syscall count
//!   versus memory
//! - **Optional durability**: fsync the destination before success is
//!   reported
//! - **Optional cleanup**: delete a partially written destination when
//!   a copy fails mid-transfer
//!
//! ## Quick Start with Builder API
//!
//! The easiest way to use bufcopy is with the [`CopyBuilder`]:
//!
//! ```no_run
//! use bufcopy::CopyBuilder;
//!
//! let bytes = CopyBuilder::new("data.db", "data.db.bak").run()?;
//! println!("Copied {bytes} bytes");
//! # Ok::<(), bufcopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! For more control, use the function API with [`CopyOptions`]:
//!
//! ```no_run
//! use bufcopy::{copy_file, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default()
//!     .with_buffer_size(64 * 1024)  // Fewer syscalls on large files
//!     .with_fsync()                 // Durable before success
//!     .with_remove_partial();       // No half-written destination
//!
//! let bytes = copy_file(Path::new("data.db"), Path::new("data.db.bak"), &options)?;
//! # Ok::<(), bufcopy::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - The destination is created if absent and truncated if present;
//!   existing content is fully replaced, never appended to.
//! - The destination is created with the platform's default
//!   permissions; no metadata (permissions, timestamps) is copied.
//! - If the source cannot be opened, the destination is not created or
//!   modified at all.
//! - A failure mid-transfer leaves the destination partially written
//!   unless [`CopyOptions::remove_partial`] is set.
//! - No retries: every failure is surfaced to the caller immediately.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with the tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod options;

pub use builder::CopyBuilder;
pub use copy::copy_file;
pub use error::{Error, Result};
pub use options::{CopyOptions, DEFAULT_BUFFER_SIZE};
