pub mod content;
pub mod error;
pub mod logging;
pub mod motion;
pub mod pointer;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use error::{PortfolioError, Result};
