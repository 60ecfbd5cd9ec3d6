mod asset_reader;
mod fetcher;
mod renderer;

pub use asset_reader::*;
pub use fetcher::*;
pub use renderer::*;
