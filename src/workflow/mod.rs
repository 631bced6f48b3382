pub mod export_flow;

pub use export_flow::{ExportFlow, ExportRequest};
