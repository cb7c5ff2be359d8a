//! Configuration for reading IGES files.

/// Configuration options for the IGES reader.
#[derive(Debug, Clone)]
pub struct IgesReaderConfiguration {
    /// When `true`, entities without a specialized decoder keep their raw
    /// parameter token lists; when `false`, only their directory attributes
    /// are retained, which saves memory on large files.
    /// Default: `true`.
    pub keep_unknown_entity_parameters: bool,
}

impl Default for IgesReaderConfiguration {
    fn default() -> Self {
        Self {
            keep_unknown_entity_parameters: true,
        }
    }
}
