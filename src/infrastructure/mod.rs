mod asset_reader_fs;
mod fetcher_cache;
mod fetcher_rest;
mod portfolio_server;
mod portfolio_service;
mod renderer_html;
mod ttl_cache;

pub use asset_reader_fs::*;
pub use fetcher_cache::*;
pub use fetcher_rest::*;
pub use portfolio_server::*;
pub use portfolio_service::*;
pub use renderer_html::*;
pub use ttl_cache::*;
