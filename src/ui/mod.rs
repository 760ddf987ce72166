pub mod dropdown;
pub mod hit;
pub mod search_input;
pub mod theme;
