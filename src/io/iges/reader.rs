//! IGES file reader.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::document::IgesDocument;
use crate::error::Result;
use crate::io::iges::decoder::IgesDecoder;
use crate::io::iges::reader_configuration::IgesReaderConfiguration;

/// Reads an IGES file into an [`IgesDocument`].
///
/// ```rust,ignore
/// let document = IgesReader::from_file("part.igs")?.read()?;
/// for entity in document.entities() {
///     println!("{}", entity);
/// }
/// ```
pub struct IgesReader {
    content: String,
    configuration: IgesReaderConfiguration,
}

impl IgesReader {
    /// Create a reader over the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Create a reader over any readable source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Create a reader over text already in memory.
    pub fn from_string(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            configuration: IgesReaderConfiguration::default(),
        }
    }

    // Exchange files predate Unicode; anything that is not valid UTF-8
    // gets the Windows-1252 treatment instead of failing the load.
    fn from_bytes(bytes: Vec<u8>) -> Self {
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(error) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(error.as_bytes());
                decoded.into_owned()
            }
        };
        Self::from_string(content)
    }

    /// Replace the default configuration.
    pub fn with_configuration(mut self, configuration: IgesReaderConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Decode the content into a document.
    pub fn read(self) -> Result<IgesDocument> {
        let mut decoder = IgesDecoder::with_configuration(self.configuration);
        for line in self.content.lines() {
            if line.is_empty() {
                continue;
            }
            decoder.feed_line(line)?;
        }
        decoder.finish()
    }
}
