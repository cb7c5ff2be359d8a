//! IGES read support.

pub mod decoder;
pub mod number;
pub mod reader;
pub mod reader_configuration;

pub(crate) mod directory_reader;
pub(crate) mod global_reader;
pub(crate) mod parameter_reader;
pub(crate) mod record_line;

pub use decoder::IgesDecoder;
pub use global_reader::Delimiters;
pub use reader::IgesReader;
pub use reader_configuration::IgesReaderConfiguration;
