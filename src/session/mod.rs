pub mod detail;
pub mod search_list;
