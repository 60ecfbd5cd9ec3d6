//! A personal portfolio page served over HTTP, listing the owner's latest GitHub repositories.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
