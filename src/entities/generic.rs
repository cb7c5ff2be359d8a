//! Passthrough entity for types without a specialized decoder.

use std::fmt;

use crate::entities::{entity_type_name, EntityCommon};

/// An entity kept with its directory attributes and, optionally, its raw
/// parameter tokens. Nothing type-specific is decoded.
#[derive(Debug, Clone, Default)]
pub struct GenericEntity {
    /// Common directory attributes.
    pub common: EntityCommon,
    /// The parameter record's tokens, exactly as split. Token 0 is the
    /// entity type number. Empty when parameter retention is disabled.
    pub parameters: Vec<String>,
}

impl GenericEntity {
    /// Create a passthrough entity from its directory attributes.
    pub fn new(common: EntityCommon) -> Self {
        Self {
            common,
            parameters: Vec::new(),
        }
    }

    /// Retain the raw token list.
    pub fn add_parameters(&mut self, parameters: &[String]) {
        self.parameters = parameters.to_vec();
    }
}

impl fmt::Display for GenericEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} (type {}): {} parameters",
            entity_type_name(self.common.entity_type_number),
            self.common.sequence_number,
            self.common.entity_type_number,
            self.parameters.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_kept_verbatim() {
        let mut common = EntityCommon::new();
        common.entity_type_number = 116;
        common.sequence_number = 9;

        let mut entity = GenericEntity::new(common);
        entity.add_parameters(&["116".to_string(), "1.".to_string(), " 2.5".to_string()]);
        assert_eq!(entity.parameters, vec!["116", "1.", " 2.5"]);
        assert_eq!(entity.to_string(), "Point #9 (type 116): 3 parameters");
    }
}
