//! Model identifiers used throughout the **pictor** workspace.
//!
//! Application code picks an enum variant; each provider crate maps the
//! variant onto its own naming scheme (`pictor-huggingface::model_map`).
//! Models without a dedicated variant go through [`Model::Custom`].
//!
//! ```rust
//! use pictor_core::model::{HuggingFaceModel, Model};
//!
//! assert_eq!(Model::default(), Model::HuggingFace(HuggingFaceModel::StableDiffusionXlBase));
//! assert_eq!(Model::from("my-org/my-model".to_string()),
//!            Model::Custom("my-org/my-model".into()));
//! ```

use std::borrow::Cow;

/// Universal identifier for a text-to-image model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models hosted on the Hugging Face inference service.
    HuggingFace(HuggingFaceModel),
    /// Fully qualified model id, passed to the provider untouched.
    Custom(Cow<'static, str>),
}

impl Default for Model {
    fn default() -> Self {
        Model::HuggingFace(HuggingFaceModel::StableDiffusionXlBase)
    }
}

/// Models with first-class support on the Hugging Face back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HuggingFaceModel {
    /// Stability AI's Stable Diffusion XL base 1.0.
    StableDiffusionXlBase,
}

impl From<HuggingFaceModel> for Model {
    fn from(val: HuggingFaceModel) -> Self {
        Model::HuggingFace(val)
    }
}

impl From<String> for Model {
    fn from(val: String) -> Self {
        Model::Custom(Cow::Owned(val))
    }
}

impl From<&'static str> for Model {
    fn from(val: &'static str) -> Self {
        Model::Custom(Cow::Borrowed(val))
    }
}
