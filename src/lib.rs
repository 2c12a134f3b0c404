//! mail2chat — turns email-shaped messages into chat notifications.

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod mime;
pub mod notification;
pub mod notifier;

pub use adapter::NotificationAdapter;
pub use error::{Error, Result};
