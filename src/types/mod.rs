//! Core types used throughout iges-tools-rs

pub mod point;

pub use point::Point3;

/// IGES section code, the classification character at column 73 of every
/// 80-column record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionCode {
    /// Start section (`S`): free-form human-readable prologue
    Start,
    /// Global section (`G`): file-level parameters and delimiters
    Global,
    /// Directory entry section (`D`): two fixed lines per entity
    Directory,
    /// Parameter data section (`P`): entity parameter records
    Parameter,
    /// Terminate section (`T`): section line counts
    Terminate,
}

impl SectionCode {
    /// Classify a section column character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(SectionCode::Start),
            'G' => Some(SectionCode::Global),
            'D' => Some(SectionCode::Directory),
            'P' => Some(SectionCode::Parameter),
            'T' => Some(SectionCode::Terminate),
            _ => None,
        }
    }

    /// The classification character for this section.
    pub fn as_char(&self) -> char {
        match self {
            SectionCode::Start => 'S',
            SectionCode::Global => 'G',
            SectionCode::Directory => 'D',
            SectionCode::Parameter => 'P',
            SectionCode::Terminate => 'T',
        }
    }

    /// Human-readable section name.
    pub fn name(&self) -> &'static str {
        match self {
            SectionCode::Start => "Start",
            SectionCode::Global => "Global",
            SectionCode::Directory => "Directory",
            SectionCode::Parameter => "Parameter",
            SectionCode::Terminate => "Terminate",
        }
    }
}

impl std::fmt::Display for SectionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
