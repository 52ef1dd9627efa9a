//! Tool abstraction and the restaurant search tool built on it.

pub mod restaurant;
pub mod tool;

pub use restaurant::RestaurantSearchTool;
pub use tool::*;
