pub mod memory;
pub mod terminal;
pub mod ui_traits;
pub mod ui_utils;
