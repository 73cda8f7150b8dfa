mod data;
mod health_check;

pub use data::*;
pub use health_check::*;
