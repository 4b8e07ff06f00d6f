pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, Submission};

pub use adapters::{LocalStorage, MemoryStore};
pub use config::toml_config::TomlConfig;
pub use core::flow::FlowController;
pub use domain::model::{Feedback, FeedbackStyle, Field, LoginForm, RegistrationForm, UserRecord};
pub use utils::error::{AppError, Result};
