pub mod id;
pub mod config;
pub mod contact;
pub mod contact_manager;
pub mod contact_store;
pub mod default_configuration;
pub mod error;
pub mod logger;

pub(crate) use error::Result;
