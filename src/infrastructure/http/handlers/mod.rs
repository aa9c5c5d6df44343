//! HTTP Handlers

mod generate;
mod page;
mod ping;

pub use generate::*;
pub use page::*;
pub use ping::*;
