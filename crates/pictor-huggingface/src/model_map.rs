use std::borrow::Cow;

use pictor_core::model::{HuggingFaceModel, Model};

pub const STABLE_DIFFUSION_XL_BASE: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Hub repository id for `model`.
pub fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::HuggingFace(HuggingFaceModel::StableDiffusionXlBase) => {
            STABLE_DIFFUSION_XL_BASE.into()
        }
        Model::Custom(custom) => custom.clone(),
    }
}
