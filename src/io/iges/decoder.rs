//! Line-fed IGES decoder.
//!
//! The decoder consumes one line at a time, routing each by the section
//! character at column 73, and assembles the document in a single pass.
//! It is the core the file and stream readers sit on; callers with lines
//! from elsewhere can drive it directly:
//!
//! ```rust,ignore
//! let mut decoder = IgesDecoder::new();
//! for line in lines {
//!     decoder.feed_line(line)?;
//! }
//! let document = decoder.finish()?;
//! ```

use ahash::AHashMap;

use crate::document::IgesDocument;
use crate::entities::EntityType;
use crate::error::{IgesError, Result};
use crate::io::iges::directory_reader::DirectoryReader;
use crate::io::iges::global_reader::{Delimiters, GlobalReader};
use crate::io::iges::parameter_reader::ParameterReader;
use crate::io::iges::reader_configuration::IgesReaderConfiguration;
use crate::io::iges::record_line::RecordLine;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::SectionCode;

/// Single-pass section decoder.
pub struct IgesDecoder {
    configuration: IgesReaderConfiguration,
    line_number: usize,
    start: String,
    global: GlobalReader,
    directory: DirectoryReader,
    parameters: ParameterReader,
    entities: Vec<EntityType>,
    pointer_map: AHashMap<i32, usize>,
    notifications: NotificationCollection,
}

impl IgesDecoder {
    /// Create a decoder with default configuration.
    pub fn new() -> Self {
        Self::with_configuration(IgesReaderConfiguration::default())
    }

    /// Create a decoder with the given configuration.
    pub fn with_configuration(configuration: IgesReaderConfiguration) -> Self {
        Self {
            configuration,
            line_number: 0,
            start: String::new(),
            global: GlobalReader::new(),
            directory: DirectoryReader::new(),
            parameters: ParameterReader::new(),
            entities: Vec::new(),
            pointer_map: AHashMap::new(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Consume one line (without its terminator).
    ///
    /// Any error is fatal for the load; the decoder remains inspectable
    /// but feeding further lines is unsupported.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let record = RecordLine::from_raw(raw);

        let section = SectionCode::from_char(record.section_char()).ok_or_else(|| {
            IgesError::UnknownSectionTag {
                tag: record.section_char(),
                line: self.line_number,
            }
        })?;

        match section {
            SectionCode::Start => {
                self.start.push_str(&record.content());
                Ok(())
            }
            SectionCode::Global => {
                self.global.feed(&record);
                Ok(())
            }
            SectionCode::Directory => self.directory.feed(
                &record,
                &mut self.entities,
                &mut self.pointer_map,
                &mut self.notifications,
            ),
            SectionCode::Parameter => {
                let delimiters = self.delimiters().ok_or(IgesError::MissingGlobalSection)?;
                self.parameters.feed(
                    &record,
                    delimiters,
                    &mut self.entities,
                    &self.pointer_map,
                    &self.configuration,
                )
            }
            SectionCode::Terminate => Ok(()),
        }
    }

    /// The delimiters, once a Global line has been seen.
    pub fn delimiters(&self) -> Option<Delimiters> {
        self.global.delimiters()
    }

    /// Entities decoded so far, in directory order.
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    /// Diagnostics recorded so far.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Lines consumed so far.
    pub fn lines_fed(&self) -> usize {
        self.line_number
    }

    /// Validate end-of-stream state and hand over the document.
    ///
    /// The sequence-number map is dropped here; it exists only to resolve
    /// parameter records during the pass.
    pub fn finish(mut self) -> Result<IgesDocument> {
        self.directory.ensure_complete()?;

        if let Some(pointer) = self.parameters.pending_pointer() {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "unterminated parameter record for directory entry {} discarded",
                    pointer
                ),
            );
        }

        let (global_text, global) = self.global.finish(&mut self.notifications);

        Ok(IgesDocument {
            start: self.start,
            global_text,
            global,
            entities: self.entities,
            notifications: self.notifications,
        })
    }
}

impl Default for IgesDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str, tag: char, sequence: i32) -> String {
        format!("{:72}{}{:7}", content, tag, sequence)
    }

    #[test]
    fn test_start_lines_accumulate_padded_content() {
        let mut decoder = IgesDecoder::new();
        decoder.feed_line(&record("SAMPLE FILE", 'S', 1)).unwrap();
        decoder.feed_line(&record("SECOND LINE", 'S', 2)).unwrap();
        let document = decoder.finish().unwrap();
        assert_eq!(document.start.len(), 144);
        assert!(document.start.starts_with("SAMPLE FILE"));
        assert_eq!(&document.start[72..83], "SECOND LINE");
    }

    #[test]
    fn test_unknown_section_tag_is_fatal() {
        let mut decoder = IgesDecoder::new();
        decoder.feed_line(&record("SAMPLE", 'S', 1)).unwrap();
        let err = decoder.feed_line(&record("junk", 'X', 2)).unwrap_err();
        assert!(matches!(
            err,
            IgesError::UnknownSectionTag { tag: 'X', line: 2 }
        ));
    }

    #[test]
    fn test_blank_tag_is_fatal() {
        let mut decoder = IgesDecoder::new();
        let err = decoder.feed_line("        ").unwrap_err();
        assert!(matches!(
            err,
            IgesError::UnknownSectionTag { tag: ' ', line: 1 }
        ));
    }

    #[test]
    fn test_parameter_before_global_is_fatal() {
        let mut decoder = IgesDecoder::new();
        let err = decoder
            .feed_line(&format!("{:64}{:8}P{:7}", "110,0.;", 1, 1))
            .unwrap_err();
        assert!(matches!(err, IgesError::MissingGlobalSection));
    }

    #[test]
    fn test_terminate_lines_are_ignored() {
        let mut decoder = IgesDecoder::new();
        decoder
            .feed_line(&record("S      1G      1D      0P      0", 'T', 1))
            .unwrap();
        let document = decoder.finish().unwrap();
        assert_eq!(document.entity_count(), 0);
    }
}
