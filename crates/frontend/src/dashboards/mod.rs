pub mod d400_sales_dashboard;
pub mod d401_sales_to_date;
