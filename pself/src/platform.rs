//! Platform detection and compatibility mapping

use crate::types::SectionKind;

/// Operating system the loader is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux (loads ELF sections)
    Linux,
    /// Windows (loads PE sections)
    Windows,
    /// macOS (loads Mach-O sections)
    MacOs,
    /// Unrecognized platform; nothing is compatible
    Unknown,
}

impl Platform {
    /// Detect the platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unknown
        }
    }

    /// Section kind this platform can load, if any
    pub fn required_kind(self) -> Option<SectionKind> {
        match self {
            Platform::Linux => Some(SectionKind::Elf),
            Platform::Windows => Some(SectionKind::Pe),
            Platform::MacOs => Some(SectionKind::MachO),
            Platform::Unknown => None,
        }
    }

    /// Human-readable platform name
    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Unknown => "unknown",
        }
    }
}
