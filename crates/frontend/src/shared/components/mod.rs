pub mod bar_chart;
pub mod data_table;
pub mod filter_panel;
pub mod multi_select;
pub mod pagination_controls;
pub mod printable_view;
pub mod stat_card;
