pub mod platform_grid;
pub mod results;
