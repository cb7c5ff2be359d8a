//! I/O module for reading CAD files in IGES format

pub mod iges;

pub use iges::{IgesDecoder, IgesReader, IgesReaderConfiguration};
