mod naming;
mod report;
mod writer;

pub use naming::{ClaimedPaths, OutputNamer};
pub use report::{DocumentReport, DocumentStatus, RunReport};
pub use writer::Materializer;
