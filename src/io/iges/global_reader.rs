//! Global section accumulation and field parsing.
//!
//! The Global section carries file-level parameters in free format, spread
//! over as many 80-column lines as needed. The first line additionally
//! fixes the two delimiter characters for the whole file.

use crate::document::GlobalSection;
use crate::io::iges::number::{decode_hollerith, parse_int, parse_real};
use crate::io::iges::record_line::RecordLine;
use crate::notification::{NotificationCollection, NotificationType};

/// The two characters that structure every free-format record, read once
/// from the fixed columns of the first Global line and never hardcoded
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Separates parameters within a record (column 3, conventionally `,`).
    pub parameter: char,
    /// Ends a logical record (column 7, conventionally `;`).
    pub record: char,
}

/// Accumulates Global lines and parses the finalized record.
#[derive(Debug, Default)]
pub struct GlobalReader {
    delimiters: Option<Delimiters>,
    /// Stripped columns 1-72, concatenated; this is the record text.
    text: String,
    /// Raw columns 1-72, concatenated; consulted only for termination.
    consolidation: String,
    section: Option<GlobalSection>,
}

impl GlobalReader {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The delimiters, once the first Global line has been seen.
    pub fn delimiters(&self) -> Option<Delimiters> {
        self.delimiters
    }

    /// Consume a Global line.
    pub fn feed(&mut self, record: &RecordLine) {
        let delimiters = match self.delimiters {
            Some(d) => d,
            None => {
                let d = Delimiters {
                    parameter: record.char_at(2),
                    record: record.char_at(6),
                };
                self.delimiters = Some(d);
                d
            }
        };

        let content = record.content();
        self.text.push_str(content.trim());
        self.consolidation.push_str(&content);

        if self.section.is_none() && self.consolidation.trim_end().ends_with(delimiters.record) {
            self.section = Some(parse_global_fields(&self.text, delimiters));
        }
    }

    /// Hand over the accumulated text and the parsed section.
    ///
    /// A Global section that started but never reached its record
    /// delimiter keeps default field values and is reported as a warning.
    pub fn finish(self, notifications: &mut NotificationCollection) -> (String, GlobalSection) {
        if let Some(section) = self.section {
            return (self.text, section);
        }

        let mut section = GlobalSection::default();
        if let Some(d) = self.delimiters {
            section.parameter_delimiter = d.parameter;
            section.record_delimiter = d.record;
        }
        if !self.text.is_empty() {
            notifications.notify(
                NotificationType::Warning,
                "global section never terminated; parameters left at defaults",
            );
        }
        (self.text, section)
    }
}

/// Split the finalized global record and populate the section fields.
///
/// Fields 1 and 2 are Hollerith declarations of the delimiters themselves,
/// so they split into a fixed three-token prefix and field k sits at token
/// index k for every k >= 3. Parsing is tolerant: a blank, missing or
/// malformed field keeps its default.
fn parse_global_fields(text: &str, delimiters: Delimiters) -> GlobalSection {
    let record = text.trim();
    let record = record.strip_suffix(delimiters.record).unwrap_or(record);
    let tokens: Vec<&str> = record.split(delimiters.parameter).collect();

    let mut section = GlobalSection {
        parameter_delimiter: delimiters.parameter,
        record_delimiter: delimiters.record,
        ..Default::default()
    };

    let string_field = |k: usize| tokens.get(k).map(|t| decode_hollerith(t));
    let int_field = |k: usize| tokens.get(k).and_then(|t| parse_int(t).ok());
    let real_field = |k: usize| tokens.get(k).and_then(|t| parse_real(t).ok());

    if let Some(v) = string_field(3) {
        section.product_id_sender = v;
    }
    if let Some(v) = string_field(4) {
        section.file_name = v;
    }
    if let Some(v) = string_field(5) {
        section.native_system_id = v;
    }
    if let Some(v) = string_field(6) {
        section.preprocessor_version = v;
    }
    if let Some(v) = int_field(7) {
        section.integer_bits = v;
    }
    if let Some(v) = int_field(8) {
        section.single_precision_magnitude = v;
    }
    if let Some(v) = int_field(9) {
        section.single_precision_significance = v;
    }
    if let Some(v) = int_field(10) {
        section.double_precision_magnitude = v;
    }
    if let Some(v) = int_field(11) {
        section.double_precision_significance = v;
    }
    if let Some(v) = string_field(12) {
        section.product_id_receiver = v;
    }
    if let Some(v) = real_field(13) {
        section.model_space_scale = v;
    }
    if let Some(v) = int_field(14) {
        section.units_flag = v;
    }
    if let Some(v) = string_field(15) {
        section.units_name = v;
    }
    if let Some(v) = int_field(16) {
        section.line_weight_gradations = v;
    }
    if let Some(v) = real_field(17) {
        section.max_line_weight = v;
    }
    if let Some(v) = string_field(18) {
        section.file_date = v;
    }
    if let Some(v) = real_field(19) {
        section.min_resolution = v;
    }
    if let Some(v) = real_field(20) {
        section.max_coordinate = v;
    }
    if let Some(v) = string_field(21) {
        section.author = v;
    }
    if let Some(v) = string_field(22) {
        section.organization = v;
    }
    if let Some(v) = int_field(23) {
        section.specification_version = v;
    }
    if let Some(v) = int_field(24) {
        section.drafting_standard = v;
    }
    if let Some(v) = string_field(25) {
        section.model_date = v;
    }
    if let Some(v) = string_field(26) {
        section.application_protocol = v;
    }

    section
}
