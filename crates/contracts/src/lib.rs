//! Shared contracts between the SalesPro frontend and backend.
//!
//! Holds the sales-order model, the response envelopes of the PHP record
//! store, and the pure filter / sort / aggregate / paginate pipeline that the
//! pages run over fetched records.

pub mod dashboards;
pub mod domain;
pub mod shared;
