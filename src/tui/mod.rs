pub mod footer;
pub mod header;
pub mod pager;
pub mod render;
pub mod spinner;
pub mod table;
