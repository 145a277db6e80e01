//! Single-file and batch conversion

pub mod processor;
pub mod batch;

pub use processor::{convert, convert_with_report, ConversionJob};
pub use batch::{batch_process, parse_batch_file, run_jobs};
