pub mod form;
pub mod list;

pub use form::AddSalesOrderForm;
pub use list::SoRecordsList;
