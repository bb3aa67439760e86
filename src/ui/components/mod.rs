pub mod detail_view;
pub mod footer;
pub mod header;
pub mod problem_list;
