//! IGES document structure

use crate::entities::EntityType;
use crate::notification::NotificationCollection;

/// Parsed Global-section parameters (IGES 5.3, section 2.2.4.3).
///
/// Fields are populated tolerantly from the accumulated global record:
/// a blank, missing or malformed field keeps its default. The two
/// delimiter fields always come from the fixed columns of the first
/// Global line, never from re-parsing the record.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSection {
    // ==================== Delimiters ====================
    /// Field 1 - Parameter delimiter character
    pub parameter_delimiter: char,
    /// Field 2 - Record delimiter character
    pub record_delimiter: char,

    // ==================== File Identification ====================
    /// Field 3 - Product identification from sender
    pub product_id_sender: String,
    /// Field 4 - File name
    pub file_name: String,
    /// Field 5 - Native system ID
    pub native_system_id: String,
    /// Field 6 - Preprocessor version
    pub preprocessor_version: String,

    // ==================== Numeric Precision ====================
    /// Field 7 - Number of binary bits for integer representation
    pub integer_bits: i32,
    /// Field 8 - Maximum power of ten in a single-precision float
    pub single_precision_magnitude: i32,
    /// Field 9 - Significant digits in a single-precision float
    pub single_precision_significance: i32,
    /// Field 10 - Maximum power of ten in a double-precision float
    pub double_precision_magnitude: i32,
    /// Field 11 - Significant digits in a double-precision float
    pub double_precision_significance: i32,

    // ==================== Model Parameters ====================
    /// Field 12 - Product identification for receiver
    pub product_id_receiver: String,
    /// Field 13 - Model space scale
    pub model_space_scale: f64,
    /// Field 14 - Units flag (1 = inches, 2 = millimeters, ...)
    pub units_flag: i32,
    /// Field 15 - Units name (e.g. "INCH", "MM")
    pub units_name: String,
    /// Field 16 - Maximum number of line weight gradations
    pub line_weight_gradations: i32,
    /// Field 17 - Width of maximum line weight in units
    pub max_line_weight: f64,
    /// Field 18 - Date and time of file generation (YYMMDD.HHNNSS)
    pub file_date: String,
    /// Field 19 - Minimum user-intended resolution
    pub min_resolution: f64,
    /// Field 20 - Approximate maximum coordinate value
    pub max_coordinate: f64,

    // ==================== Authorship ====================
    /// Field 21 - Name of author
    pub author: String,
    /// Field 22 - Author's organization
    pub organization: String,
    /// Field 23 - Version of the format the file complies to
    pub specification_version: i32,
    /// Field 24 - Drafting standard code
    pub drafting_standard: i32,
    /// Field 25 - Date and time the model was created or last modified
    pub model_date: String,
    /// Field 26 - Application protocol identifier
    pub application_protocol: String,
}

impl Default for GlobalSection {
    fn default() -> Self {
        Self {
            parameter_delimiter: ',',
            record_delimiter: ';',
            product_id_sender: String::new(),
            file_name: String::new(),
            native_system_id: String::new(),
            preprocessor_version: String::new(),
            integer_bits: 32,
            single_precision_magnitude: 38,
            single_precision_significance: 6,
            double_precision_magnitude: 308,
            double_precision_significance: 15,
            product_id_receiver: String::new(),
            model_space_scale: 1.0,
            units_flag: 1,
            units_name: String::new(),
            line_weight_gradations: 1,
            max_line_weight: 0.0,
            file_date: String::new(),
            min_resolution: 0.0,
            max_coordinate: 0.0,
            author: String::new(),
            organization: String::new(),
            specification_version: 0,
            drafting_standard: 0,
            model_date: String::new(),
            application_protocol: String::new(),
        }
    }
}

/// A loaded IGES file: section text, global parameters and the entities in
/// directory order.
#[derive(Debug, Clone, Default)]
pub struct IgesDocument {
    /// Accumulated Start-section text (columns 1-72 of every S line).
    pub start: String,
    /// Accumulated Global-section text, stripped per line, unparsed.
    pub global_text: String,
    /// Parsed Global-section parameters.
    pub global: GlobalSection,
    /// Entities in directory order.
    pub entities: Vec<EntityType>,
    /// Diagnostics collected during the read.
    pub notifications: NotificationCollection,
}

impl IgesDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities in directory order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut EntityType> {
        self.entities.iter_mut()
    }

    /// Iterate over the entities with a given type number.
    pub fn entities_by_type(&self, type_number: i32) -> impl Iterator<Item = &EntityType> {
        self.entities
            .iter()
            .filter(move |e| e.type_number() == type_number)
    }

    /// Find an entity by its directory sequence number.
    pub fn entity_by_sequence(&self, sequence_number: i32) -> Option<&EntityType> {
        self.entities
            .iter()
            .find(|e| e.sequence_number() == sequence_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityCommon;

    #[test]
    fn test_global_defaults() {
        let global = GlobalSection::default();
        assert_eq!(global.parameter_delimiter, ',');
        assert_eq!(global.record_delimiter, ';');
        assert_eq!(global.integer_bits, 32);
        assert_eq!(global.model_space_scale, 1.0);
        assert_eq!(global.units_flag, 1);
        assert!(global.file_name.is_empty());
    }

    #[test]
    fn test_entity_queries() {
        let mut doc = IgesDocument::new();
        for (type_number, sequence_number) in [(110, 1), (116, 3), (110, 5)] {
            doc.entities.push(EntityType::from_directory_entry(EntityCommon {
                entity_type_number: type_number,
                sequence_number,
                ..Default::default()
            }));
        }

        assert_eq!(doc.entity_count(), 3);
        assert_eq!(doc.entities_by_type(110).count(), 2);
        assert_eq!(doc.entities_by_type(126).count(), 0);
        assert_eq!(
            doc.entity_by_sequence(3).map(|e| e.type_number()),
            Some(116)
        );
        assert!(doc.entity_by_sequence(4).is_none());
    }
}
