//! Integrity-verifying section loader
//!
//! Parses a container, verifies each section's stored digest, and extracts
//! the first section compatible with the given platform.
//!
//! # Selection Policy
//!
//! Sections are scanned in file order. The first section that passes digest
//! verification AND matches the platform is extracted; scanning stops there
//! and remaining sections are not examined. This is a single-payload
//! assumption: a container with several eligible sections only ever yields
//! the first one.
//!
//! Digest mismatches and out-of-range descriptors disqualify one section
//! and are recorded in the feedback log; they never abort the scan. Format
//! errors in the header or table abort the whole load.

use alloc::format;
use alloc::vec::Vec;

use crate::error::{PselfError, Result};
use crate::feedback::{FeedbackCategory, FeedbackCollector};
use crate::format::{self, Header, SectionDescriptor};
use crate::platform::Platform;
use crate::types::{LoadedSection, RECORD_SIZE};
use crate::utils::digest;

/// Loader progress through one load operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing parsed yet
    Start,
    /// Header decoded
    HeaderParsed,
    /// Section table decoded
    TableParsed,
    /// Walking the descriptor list
    Scanning,
    /// Terminal: a section was extracted
    Loaded,
    /// Terminal: no section was compatible
    Exhausted,
    /// Terminal: the container was malformed
    Failed,
}

/// Container loader
///
/// Owns the container bytes and the decoded header/descriptor list for the
/// duration of one load operation.
pub struct Loader {
    data: Vec<u8>,
    state: LoadState,
    header: Option<Header>,
    sections: Vec<SectionDescriptor>,
    feedback: FeedbackCollector,
}

impl Loader {
    /// Feedback log capacity
    const MAX_FEEDBACK: usize = 64;

    /// Create a loader over raw container bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            state: LoadState::Start,
            header: None,
            sections: Vec::new(),
            feedback: FeedbackCollector::new(Self::MAX_FEEDBACK),
        }
    }

    /// Current loader state
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Decoded header, once parsing has reached it
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Decoded section descriptors, once the table has been parsed
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Feedback log of per-section outcomes
    pub fn feedback(&self) -> &FeedbackCollector {
        &self.feedback
    }

    /// Parse the container and extract the first verified section
    /// compatible with `platform`
    ///
    /// # Returns
    /// The extracted payload, or `BadMagic`/`Truncated`/... for a malformed
    /// container and `NoCompatibleSection` when the descriptor list is
    /// exhausted without a match.
    pub fn load(&mut self, platform: Platform) -> Result<LoadedSection> {
        let header = match Header::decode(&self.data) {
            Ok(header) => header,
            Err(err) => {
                self.state = LoadState::Failed;
                self.feedback
                    .error(FeedbackCategory::Header, format!("header rejected: {}", err));
                return Err(err);
            }
        };
        self.state = LoadState::HeaderParsed;
        self.feedback.info(
            FeedbackCategory::Header,
            format!(
                "container version {}, {} section(s)",
                header.version, header.section_count
            ),
        );

        match self.parse_table(header.section_count) {
            Ok(sections) => self.sections = sections,
            Err(err) => {
                self.state = LoadState::Failed;
                self.feedback.error(
                    FeedbackCategory::SectionTable,
                    format!("section table rejected: {}", err),
                );
                return Err(err);
            }
        }
        self.header = Some(header);
        self.state = LoadState::TableParsed;

        self.scan(platform)
    }

    /// Decode `count` packed records following the header
    ///
    /// The count is authoritative; a table running past the end of the
    /// buffer is a fatal `Truncated`.
    fn parse_table(&self, count: u32) -> Result<Vec<SectionDescriptor>> {
        let mut sections = Vec::with_capacity(count as usize);
        for index in 0..count as usize {
            let start = format::record_offset(index);
            let end = start + RECORD_SIZE;
            if end > self.data.len() {
                return Err(PselfError::Truncated);
            }
            sections.push(SectionDescriptor::decode(&self.data[start..end])?);
        }
        Ok(sections)
    }

    /// Walk descriptors in file order and extract the first eligible one
    fn scan(&mut self, platform: Platform) -> Result<LoadedSection> {
        self.state = LoadState::Scanning;
        let required = platform.required_kind();

        for descriptor in &self.sections {
            // Bounds check before slicing; a bad descriptor disqualifies
            // only this section.
            let range = match descriptor.payload_range(self.data.len()) {
                Ok(range) => range,
                Err(_) => {
                    self.feedback.error(
                        FeedbackCategory::SectionTable,
                        format!("section '{}' payload out of range", descriptor.name),
                    );
                    continue;
                }
            };
            let content = &self.data[range];

            if !digest::matches(&descriptor.digest, content) {
                self.feedback.error(
                    FeedbackCategory::Integrity,
                    format!("digest mismatch for section '{}'", descriptor.name),
                );
                continue;
            }

            if required != Some(descriptor.kind) {
                self.feedback.debug(
                    FeedbackCategory::Platform,
                    format!(
                        "section '{}' ({}) not applicable on {}",
                        descriptor.name,
                        descriptor.kind.name(),
                        platform.name()
                    ),
                );
                continue;
            }

            self.feedback.success(
                FeedbackCategory::Platform,
                format!(
                    "loading section '{}' ({}) for {}",
                    descriptor.name,
                    descriptor.kind.name(),
                    platform.name()
                ),
            );
            let loaded = LoadedSection {
                name: descriptor.name.clone(),
                kind: descriptor.kind,
                content: content.to_vec(),
            };
            self.state = LoadState::Loaded;
            return Ok(loaded);
        }

        self.state = LoadState::Exhausted;
        self.feedback.error(
            FeedbackCategory::Platform,
            format!("no compatible section found for {}", platform.name()),
        );
        Err(PselfError::NoCompatibleSection)
    }
}

/// Parse `data` and extract the first verified section compatible with
/// `platform`
///
/// Convenience wrapper over [`Loader`] for callers that do not need the
/// feedback log.
pub fn load_compatible(data: Vec<u8>, platform: Platform) -> Result<LoadedSection> {
    Loader::new(data).load(platform)
}
