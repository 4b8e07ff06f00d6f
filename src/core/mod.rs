pub mod flow;
pub mod rules;
pub mod validator;

pub use crate::domain::model::{AccountLookup, Feedback, Field, LoginForm, RegistrationForm, UserRecord};
pub use crate::domain::ports::{ConfigProvider, Store};
pub use crate::utils::error::Result;
