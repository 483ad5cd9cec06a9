pub mod aggregate;
pub mod new_order;

pub use aggregate::*;
pub use new_order::*;
