pub mod binary_search;
pub(crate) mod common;
pub mod par_quick_sort;
pub mod partition;
pub mod quick_sort;
pub mod shuffle;
pub mod swap;
