mod json_file;

pub use json_file::{IfMatch, JsonFile, JsonFileError, Revision, Snapshot};
