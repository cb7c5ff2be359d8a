//! Parameter data decoding.
//!
//! A logical parameter record spans one or more P lines: columns 1-64
//! carry record text, columns 65-72 of the first line point back at the
//! owning directory entry. The record ends when its text, trimmed, ends
//! with the record delimiter.

use ahash::AHashMap;

use crate::entities::EntityType;
use crate::error::{IgesError, Result};
use crate::io::iges::global_reader::Delimiters;
use crate::io::iges::number::parse_int;
use crate::io::iges::reader_configuration::IgesReaderConfiguration;
use crate::io::iges::record_line::RecordLine;

/// Zero-based end of the parameter text columns.
const TEXT_END: usize = 64;

enum ParameterState {
    AwaitingFirstLine,
    Continuing { pointer: i32, record: String },
}

/// Multi-line parameter record accumulator.
pub(crate) struct ParameterReader {
    state: ParameterState,
}

impl ParameterReader {
    pub fn new() -> Self {
        Self {
            state: ParameterState::AwaitingFirstLine,
        }
    }

    /// Consume a Parameter line; on record termination, resolve the
    /// directory pointer and decode into the owning entity.
    ///
    /// An unresolvable pointer fails before any entity is touched.
    pub fn feed(
        &mut self,
        record_line: &RecordLine,
        delimiters: Delimiters,
        entities: &mut [EntityType],
        pointer_map: &AHashMap<i32, usize>,
        configuration: &IgesReaderConfiguration,
    ) -> Result<()> {
        let (pointer, mut record) =
            match std::mem::replace(&mut self.state, ParameterState::AwaitingFirstLine) {
                ParameterState::AwaitingFirstLine => {
                    let pointer = parse_int(&record_line.columns(TEXT_END, 72))?;
                    (pointer, String::new())
                }
                ParameterState::Continuing { pointer, record } => (pointer, record),
            };
        record.push_str(&record_line.columns(0, TEXT_END));

        let body = match record.trim().strip_suffix(delimiters.record) {
            Some(body) => body.to_string(),
            None => {
                self.state = ParameterState::Continuing { pointer, record };
                return Ok(());
            }
        };

        let tokens: Vec<String> = body
            .split(delimiters.parameter)
            .map(str::to_string)
            .collect();

        let index = *pointer_map
            .get(&pointer)
            .ok_or(IgesError::UnresolvedPointer { pointer })?;
        let entity = &mut entities[index];
        if configuration.keep_unknown_entity_parameters
            || !matches!(entity, EntityType::Generic(_))
        {
            entity.add_parameters(&tokens)?;
        }
        Ok(())
    }

    /// The directory pointer of a record still open at end of stream.
    pub fn pending_pointer(&self) -> Option<i32> {
        match &self.state {
            ParameterState::AwaitingFirstLine => None,
            ParameterState::Continuing { pointer, .. } => Some(*pointer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityCommon, EntityType};

    const DELIMITERS: Delimiters = Delimiters {
        parameter: ',',
        record: ';',
    };

    fn p_line(content: &str, pointer: i32, sequence: i32) -> RecordLine {
        RecordLine::from_raw(&format!("{:64}{:8}P{:7}", content, pointer, sequence))
    }

    fn line_entity(sequence_number: i32) -> EntityType {
        EntityType::from_directory_entry(EntityCommon {
            entity_type_number: 110,
            sequence_number,
            ..Default::default()
        })
    }

    #[test]
    fn test_single_line_record() {
        let mut reader = ParameterReader::new();
        let mut entities = vec![line_entity(1)];
        let mut pointer_map = AHashMap::new();
        pointer_map.insert(1, 0usize);
        let configuration = IgesReaderConfiguration::default();

        reader
            .feed(
                &p_line("110,0.,0.,0.,3.,4.,0.;", 1, 1),
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &configuration,
            )
            .unwrap();

        match &entities[0] {
            EntityType::Line(line) => {
                assert_eq!(line.end.x, 3.0);
                assert_eq!(line.end.y, 4.0);
            }
            other => panic!("expected a line, got {other}"),
        }
        assert!(reader.pending_pointer().is_none());
    }

    #[test]
    fn test_multi_line_record_reassembly() {
        let mut reader = ParameterReader::new();
        let mut entities = vec![line_entity(1)];
        let mut pointer_map = AHashMap::new();
        pointer_map.insert(1, 0usize);
        let configuration = IgesReaderConfiguration::default();

        // The record breaks after a token; its trailing column padding
        // travels into the reassembled text.
        reader
            .feed(
                &p_line("110,0.,0.,0.,1.", 1, 1),
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &configuration,
            )
            .unwrap();
        assert_eq!(reader.pending_pointer(), Some(1));

        // Continuation pointer columns are ignored.
        reader
            .feed(
                &p_line(",2.,3.;", 999, 2),
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &configuration,
            )
            .unwrap();

        match &entities[0] {
            EntityType::Line(line) => {
                assert_eq!(line.end, crate::types::Point3::new(1.0, 2.0, 3.0));
            }
            other => panic!("expected a line, got {other}"),
        }
        assert!(reader.pending_pointer().is_none());
    }

    #[test]
    fn test_unresolved_pointer_leaves_entities_unmodified() {
        let mut reader = ParameterReader::new();
        let mut entities = vec![line_entity(1)];
        let mut pointer_map = AHashMap::new();
        pointer_map.insert(1, 0usize);
        let configuration = IgesReaderConfiguration::default();

        let err = reader
            .feed(
                &p_line("110,9.,9.,9.,9.,9.,9.;", 33, 1),
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &configuration,
            )
            .unwrap_err();
        assert!(matches!(err, IgesError::UnresolvedPointer { pointer: 33 }));

        match &entities[0] {
            EntityType::Line(line) => assert_eq!(line.end, crate::types::Point3::ZERO),
            other => panic!("expected a line, got {other}"),
        }
    }

    #[test]
    fn test_generic_parameters_respect_configuration() {
        let mut pointer_map = AHashMap::new();
        pointer_map.insert(5, 0usize);
        let record = p_line("116,1.,2.,3.;", 5, 1);

        let point = || {
            EntityType::from_directory_entry(EntityCommon {
                entity_type_number: 116,
                sequence_number: 5,
                ..Default::default()
            })
        };

        let mut entities = vec![point()];
        let mut reader = ParameterReader::new();
        reader
            .feed(
                &record,
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &IgesReaderConfiguration::default(),
            )
            .unwrap();
        match &entities[0] {
            EntityType::Generic(e) => assert_eq!(e.parameters.len(), 4),
            other => panic!("expected a generic entity, got {other}"),
        }

        let mut entities = vec![point()];
        let mut reader = ParameterReader::new();
        reader
            .feed(
                &record,
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &IgesReaderConfiguration {
                    keep_unknown_entity_parameters: false,
                },
            )
            .unwrap();
        match &entities[0] {
            EntityType::Generic(e) => assert!(e.parameters.is_empty()),
            other => panic!("expected a generic entity, got {other}"),
        }
    }

    #[test]
    fn test_blank_pointer_field_is_malformed() {
        let mut reader = ParameterReader::new();
        let mut entities = vec![line_entity(1)];
        let pointer_map = AHashMap::new();
        let record = RecordLine::from_raw(&format!("{:64}{:8}P{:7}", "110,0.;", " ", 1));
        let err = reader
            .feed(
                &record,
                DELIMITERS,
                &mut entities,
                &pointer_map,
                &IgesReaderConfiguration::default(),
            )
            .unwrap_err();
        assert!(matches!(err, IgesError::MalformedNumber { .. }));
    }
}
