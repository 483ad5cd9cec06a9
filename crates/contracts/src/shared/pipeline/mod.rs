//! Pure transformations applied to fetched records on every interaction.
//!
//! ```text
//! records ─► filter ─┬─► sort ──────► paginate ─► table rows
//!                    └─► aggregate ─► paginate ─► grouped rows
//! ```
//!
//! Nothing here suspends, allocates shared state or fails: malformed input
//! degrades to empty results, trailing nulls and clamped pages.

pub mod aggregate;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use aggregate::{group_records, summarize, GroupDimension, GroupField, GroupedRow, SalesSummary};
pub use filter::{filter_records, FilterOptions, FilterState};
pub use paginate::{paginate, total_pages, OwnedPage, Page, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use sort::{sort_records, SortDirection, SortState, SortValue, Sortable};

#[cfg(test)]
pub(crate) mod fixtures;
