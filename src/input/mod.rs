pub mod log_reader;
pub mod parser;

pub use log_reader::LogReader;
pub use parser::LogParser;
