//! # iges-tools-rs
//!
//! A pure Rust library for reading CAD files in IGES format.
//!
//! IGES (Initial Graphics Exchange Specification) files are sequences of
//! 80-column card images grouped into Start, Global, Directory Entry,
//! Parameter Data and Terminate sections. This library decodes them into
//! a document of typed entities.
//!
//! ## Features
//!
//! - Read IGES files (ASCII, fixed 80-column records)
//! - Typed decoding for lines, rational B-spline curves and general notes
//! - Generic entity capture for every other entity type
//! - Global section parsing with per-file delimiter detection
//! - Diagnostics collected as notifications instead of hard failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iges_tools_rs::{IgesReader, EntityType};
//!
//! // Read an IGES file
//! let document = IgesReader::from_file("part.igs")?.read()?;
//!
//! // Access entities
//! for entity in document.entities() {
//!     println!("Entity: {}", entity);
//! }
//!
//! // Typed access
//! for entity in document.entities_by_type(126) {
//!     if let EntityType::RationalBSplineCurve(curve) = entity {
//!         println!("degree {} curve", curve.degree);
//!     }
//! }
//! # Ok::<(), iges_tools_rs::IgesError>(())
//! ```
//!
//! ## Architecture
//!
//! - `IgesReader` - File and stream entry points
//! - `IgesDecoder` - Line-fed single-pass section decoder
//! - `IgesDocument` - Decoded document with entities and diagnostics
//! - `EntityType` - Enum over the typed and generic entity structs

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{IgesError, Result};
pub use types::{Point3, SectionCode};

// Re-export entity types
pub use entities::{
    EntityCommon, EntityType, GeneralNote, GenericEntity, Line, RationalBSplineCurve, TextString,
};

// Re-export document
pub use document::{GlobalSection, IgesDocument};

// Re-export notifications
pub use notification::{Notification, NotificationCollection, NotificationType};

// Re-export I/O types
pub use io::iges::{IgesDecoder, IgesReader, IgesReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_empty_document_decodes() {
        let content = format!("{:72}T{:7}\n", "", 1);
        let document = IgesReader::from_string(content).read().unwrap();
        assert_eq!(document.entity_count(), 0);
        assert!(document.notifications.is_empty());
    }
}
