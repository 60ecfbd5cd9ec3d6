mod contact;
mod entities;
mod error;
mod profile;
mod request;
mod response;
mod ui_state;
mod view;

pub use contact::*;
pub use entities::*;
pub use error::*;
pub use profile::*;
pub use request::*;
pub use response::*;
pub use ui_state::*;
pub use view::*;
