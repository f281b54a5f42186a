mod client;
pub mod error;
pub mod failure;
pub mod history;
pub mod model;
pub mod payload;
pub mod provider;
pub mod record;
pub mod style;
pub mod template;

pub use client::PictorClient;
