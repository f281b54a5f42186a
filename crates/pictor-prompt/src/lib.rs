//! Prompt composition for **pictor**.
//!
//! * [`composer`]: the pure `trim + style suffix` rule and its validation error.
//! * [`styled`]: [`styled::StyledPrompt`], the value a UI passes to
//!   [`pictor_core::PictorClient::generate`].
pub mod composer;
pub mod styled;
