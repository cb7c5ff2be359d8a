//! Directory entry decoding.
//!
//! Each entity owns exactly two consecutive Directory lines of fixed
//! 8-column fields (one 9/7 split on the first line). The first line's
//! sequence number is the entity's key for parameter resolution.

use ahash::{AHashMap, AHashSet};

use crate::entities::{entity_type_name, EntityCommon, EntityType};
use crate::error::{IgesError, Result};
use crate::io::iges::number::{parse_int, parse_int_field};
use crate::io::iges::record_line::RecordLine;
use crate::notification::{NotificationCollection, NotificationType};

enum DirectoryState {
    AwaitingFirstLine,
    AwaitingSecondLine(EntityCommon),
}

/// Two-line directory state machine.
pub(crate) struct DirectoryReader {
    state: DirectoryState,
    generic_types_noted: AHashSet<i32>,
}

impl DirectoryReader {
    pub fn new() -> Self {
        Self {
            state: DirectoryState::AwaitingFirstLine,
            generic_types_noted: AHashSet::new(),
        }
    }

    /// Consume a Directory line. Completing an entry appends the entity and
    /// records its sequence number in the pointer map.
    pub fn feed(
        &mut self,
        record: &RecordLine,
        entities: &mut Vec<EntityType>,
        pointer_map: &mut AHashMap<i32, usize>,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        match std::mem::replace(&mut self.state, DirectoryState::AwaitingFirstLine) {
            DirectoryState::AwaitingFirstLine => {
                let common = EntityCommon {
                    entity_type_number: parse_int(&record.columns(0, 8))?,
                    parameter_pointer: parse_int(&record.columns(8, 16))?,
                    structure: parse_int_field(&record.columns(16, 24))?,
                    line_font_pattern: parse_int_field(&record.columns(24, 32))?,
                    level: parse_int_field(&record.columns(32, 40))?,
                    view: parse_int_field(&record.columns(40, 48))?,
                    transform: parse_int_field(&record.columns(48, 56))?,
                    label_display_association: parse_int_field(&record.columns(56, 65))?,
                    status_number: parse_int_field(&record.columns(65, 72))?,
                    sequence_number: parse_int(&record.columns(73, 80))?,
                    ..Default::default()
                };
                self.state = DirectoryState::AwaitingSecondLine(common);
                Ok(())
            }
            DirectoryState::AwaitingSecondLine(mut common) => {
                common.line_weight_number = parse_int_field(&record.columns(8, 16))?;
                common.color_number = parse_int_field(&record.columns(16, 24))?;
                common.parameter_line_count = parse_int_field(&record.columns(24, 32))?;
                common.form_number = parse_int_field(&record.columns(32, 40))?;
                common.entity_label = record.columns(56, 64).trim().to_string();
                common.entity_subscript_number = parse_int_field(&record.columns(64, 72))?;

                let type_number = common.entity_type_number;
                let sequence_number = common.sequence_number;

                let entity = EntityType::from_directory_entry(common);
                if matches!(entity, EntityType::Generic(_))
                    && self.generic_types_noted.insert(type_number)
                {
                    notifications.notify(
                        NotificationType::Info,
                        format!(
                            "entity type {} ({}) kept as generic",
                            type_number,
                            entity_type_name(type_number)
                        ),
                    );
                }

                entities.push(entity);
                if pointer_map.insert(sequence_number, entities.len() - 1).is_some() {
                    notifications.notify(
                        NotificationType::Warning,
                        format!(
                            "duplicate directory sequence number {}; later entry wins",
                            sequence_number
                        ),
                    );
                }
                Ok(())
            }
        }
    }

    /// Verify no entry is still waiting for its second line.
    pub fn ensure_complete(&self) -> Result<()> {
        match &self.state {
            DirectoryState::AwaitingFirstLine => Ok(()),
            DirectoryState::AwaitingSecondLine(common) => {
                Err(IgesError::MissingSecondDirectoryLine {
                    sequence_number: common.sequence_number,
                })
            }
        }
    }
}
