pub mod report;

pub use report::SalesToDateReport;
