//! Interaction with the CI workflow runner: output channels and date stamps

pub mod date;
pub mod outputs;

pub use outputs::{CommandSink, FileSink, OutputSink};
