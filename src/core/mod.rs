pub mod client;
pub mod endpoint;
pub mod participant;
pub mod team;

pub use crate::domain::model::{Page, Record};
pub use crate::domain::ports::{ConfigProvider, Fundraiser};
pub use crate::utils::error::Result;
