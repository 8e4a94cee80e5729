mod generate;
mod me;
mod status;
mod templates;
mod upload;

pub use generate::generate;
pub use me::me;
pub use status::status;
pub use templates::templates;
pub use upload::upload;
