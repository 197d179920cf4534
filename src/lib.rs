pub mod app;
pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::app::{api_router, create_app};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
