//! Structured feedback for load and verification operations
//!
//! Per-section outcomes are recorded here rather than printed; a front-end
//! decides how to display them.

use alloc::string::String;
use alloc::vec::Vec;

/// Feedback message with severity level
#[derive(Debug, Clone)]
pub struct FeedbackMessage {
    /// Message severity
    pub level: FeedbackLevel,
    /// Message category for filtering
    pub category: FeedbackCategory,
    /// Message text
    pub message: String,
}

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    /// Normal operation info
    Info,
    /// Operation succeeded
    Success,
    /// Non-critical issue
    Warning,
    /// Operation failed
    Error,
    /// Detailed debug info
    Debug,
}

/// Message category for filtering/display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCategory {
    /// Header parsing
    Header,
    /// Section table parsing and bounds
    SectionTable,
    /// Digest verification
    Integrity,
    /// Platform compatibility and selection
    Platform,
    /// Fingerprint baseline operations
    Fingerprint,
    /// General messages
    General,
}

impl FeedbackMessage {
    /// Info-level message
    pub fn info(category: FeedbackCategory, message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Info,
            category,
            message: message.into(),
        }
    }

    /// Success-level message
    pub fn success(category: FeedbackCategory, message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Success,
            category,
            message: message.into(),
        }
    }

    /// Warning-level message
    pub fn warning(category: FeedbackCategory, message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Warning,
            category,
            message: message.into(),
        }
    }

    /// Error-level message
    pub fn error(category: FeedbackCategory, message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Error,
            category,
            message: message.into(),
        }
    }

    /// Debug-level message
    pub fn debug(category: FeedbackCategory, message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Debug,
            category,
            message: message.into(),
        }
    }

    /// Format for display with prefix
    pub fn format_line(&self) -> String {
        use alloc::format;
        let prefix = match self.level {
            FeedbackLevel::Info => "[INFO]",
            FeedbackLevel::Success => "[OK]",
            FeedbackLevel::Warning => "[WARN]",
            FeedbackLevel::Error => "[ERR]",
            FeedbackLevel::Debug => "[DBG]",
        };
        format!("{} {}", prefix, self.message)
    }
}

/// Feedback collector - accumulates messages for batch display
pub struct FeedbackCollector {
    messages: Vec<FeedbackMessage>,
    max_messages: usize,
}

impl FeedbackCollector {
    /// Create a collector holding at most `max_messages` entries
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: Vec::with_capacity(max_messages),
            max_messages,
        }
    }

    /// Add a message
    pub fn add(&mut self, msg: FeedbackMessage) {
        if self.messages.len() >= self.max_messages {
            self.messages.remove(0); // FIFO - remove oldest
        }
        self.messages.push(msg);
    }

    /// Add info message
    pub fn info(&mut self, category: FeedbackCategory, message: impl Into<String>) {
        self.add(FeedbackMessage::info(category, message));
    }

    /// Add success message
    pub fn success(&mut self, category: FeedbackCategory, message: impl Into<String>) {
        self.add(FeedbackMessage::success(category, message));
    }

    /// Add error message
    pub fn error(&mut self, category: FeedbackCategory, message: impl Into<String>) {
        self.add(FeedbackMessage::error(category, message));
    }

    /// Add debug message
    pub fn debug(&mut self, category: FeedbackCategory, message: impl Into<String>) {
        self.add(FeedbackMessage::debug(category, message));
    }

    /// Get all messages
    pub fn messages(&self) -> &[FeedbackMessage] {
        &self.messages
    }

    /// Get messages filtered by category
    pub fn messages_by_category(&self, category: FeedbackCategory) -> Vec<&FeedbackMessage> {
        self.messages.iter().filter(|m| m.category == category).collect()
    }

    /// Check if any errors
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == FeedbackLevel::Error)
    }

    /// Clear all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
