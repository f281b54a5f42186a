mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{HuggingFaceAdapter, HuggingFaceAdapterBuilder, SETUP_INSTRUCTIONS, TOKEN_ENV};
pub use model_map::{STABLE_DIFFUSION_XL_BASE, map_model};
pub mod api_v1;
mod client;
pub mod error;

pub use client::HuggingFaceClient;
