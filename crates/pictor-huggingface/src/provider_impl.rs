use std::{future::Future, pin::Pin, sync::Arc};

use pictor_core::{
    error::Result,
    payload::ImagePayload,
    provider::{TextToImageParameters, TextToImageProvider},
};

use crate::{HuggingFaceAdapter, api_v1::TextToImageRequest, model_map::map_model};

impl TextToImageProvider for HuggingFaceAdapter {
    fn text_to_image<'p>(
        &self,
        params: TextToImageParameters,
    ) -> Pin<Box<dyn Future<Output = Result<ImagePayload>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model);
            let request = TextToImageRequest::new(params.prompt);

            let bytes = client.text_to_image(&model, &request).await?;

            ImagePayload::decode(bytes)
        })
    }
}
