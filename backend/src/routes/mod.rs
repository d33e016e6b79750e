pub mod heatmap;
pub mod monthly;
pub mod options;
pub mod players;
pub mod teams;

pub const HEALTH: &str = "/health";
