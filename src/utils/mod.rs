pub mod color;
pub mod errors;
pub mod registry;

pub use color::parse_color;
pub use errors::{user_facing_message, ChartError};
