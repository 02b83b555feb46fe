//! PSELF Container Implementation
//!
//! A `no_std` implementation of the PSELF multi-platform executable container
//! with integrity-verified section loading.
//!
//! # Overview
//!
//! A PSELF container holds several named, typed payload sections (ELF, PE,
//! Mach-O), each protected by a stored SHA-256 digest. This crate provides:
//! - Fixed-layout header and section-table codecs
//! - Per-section digest verification
//! - Platform-compatibility selection and first-match extraction
//! - A fingerprint baseline store for drift detection
//! - A container builder for assembling new images
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Format layer** - Header and section-record codecs over raw bytes
//! 2. **Loader layer** - Parses a container, verifies digests, extracts the
//!    section matching the running platform
//! 3. **Fingerprint layer** - Baseline digests of named blobs, re-verified
//!    on demand
//!
//! # Usage
//!
//! ```ignore
//! use pself::{Loader, Platform};
//!
//! // Parse and extract the section for the running platform
//! let mut loader = Loader::new(container_bytes);
//! let section = loader.load(Platform::current())?;
//!
//! // Per-section outcomes are recorded in the feedback log
//! for msg in loader.feedback().messages() {
//!     println!("{}", msg.format_line());
//! }
//! ```
//!
//! # Building Containers
//!
//! ```ignore
//! use pself::{ContainerBuilder, SectionKind};
//!
//! let mut builder = ContainerBuilder::new();
//! builder.add_section(SectionKind::Elf, "text", &payload);
//! let image = builder.build()?;
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod error;
pub mod feedback;
pub mod fingerprint;
pub mod format;
pub mod loader;
pub mod platform;
pub mod types;
pub mod utils;

pub use error::{PselfError, Result};
pub use types::{LoadedSection, SectionKind, FORMAT_VERSION, MAGIC};

// High-level API exports
pub use builder::ContainerBuilder;
pub use fingerprint::{FingerprintStore, VerificationResult};
pub use format::{Header, SectionDescriptor};
pub use loader::{load_compatible, LoadState, Loader};
pub use platform::Platform;
