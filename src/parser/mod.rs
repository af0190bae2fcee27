pub mod dates;
pub mod records;

pub use records::RecordParser;
