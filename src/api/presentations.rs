//! Presentation generation and template endpoints.

use tracing::info;

use super::error::Result;
use super::request::{GenerationRequest, SlideBySlideRequest};
use super::tasks::PollConfig;
use super::types::{GenerationResult, SubmitReceipt, TaskHandle, Template};
use super::{DEFAULT_TIMEOUT, GENERATION_TIMEOUT, SlideSpeakClient, handle_response};

const GENERATE_ENDPOINT: &str = "/presentation/generate";
const SLIDE_BY_SLIDE_ENDPOINT: &str = "/presentation/generate/slide-by-slide";
const TEMPLATES_ENDPOINT: &str = "/presentation/templates";

impl SlideSpeakClient {
    /// Submit a text-to-presentation request.
    ///
    /// The request is validated locally first; an invalid request never
    /// reaches the network. Returns the handle of the generation task;
    /// pair it with [`await_completion`](Self::await_completion) to obtain
    /// the finished presentation.
    pub async fn submit_generate(&self, request: &GenerationRequest) -> Result<TaskHandle> {
        request.validate()?;
        info!(
            length = request.length,
            template = %request.template,
            "submitting presentation request"
        );
        let response = self
            .post(GENERATE_ENDPOINT, GENERATION_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let receipt: SubmitReceipt = handle_response(response).await?;
        Ok(receipt.task_id)
    }

    /// Submit a presentation request with an explicit layout per slide.
    pub async fn submit_slide_by_slide(
        &self,
        request: &SlideBySlideRequest,
    ) -> Result<TaskHandle> {
        request.validate()?;
        info!(
            slides = request.slides.len(),
            template = %request.template,
            "submitting slide-by-slide request"
        );
        let response = self
            .post(SLIDE_BY_SLIDE_ENDPOINT, GENERATION_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let receipt: SubmitReceipt = handle_response(response).await?;
        Ok(receipt.task_id)
    }

    /// List the presentation templates available to this account.
    pub async fn templates(&self) -> Result<Vec<Template>> {
        let response = self.get(TEMPLATES_ENDPOINT, DEFAULT_TIMEOUT).send().await?;
        handle_response(response).await
    }

    /// Submit a text-to-presentation request and wait for the result.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        config: &PollConfig,
    ) -> Result<GenerationResult> {
        let task_id = self.submit_generate(request).await?;
        self.await_completion(&task_id, config).await
    }

    /// Submit a slide-by-slide request and wait for the result.
    pub async fn generate_slide_by_slide(
        &self,
        request: &SlideBySlideRequest,
        config: &PollConfig,
    ) -> Result<GenerationResult> {
        let task_id = self.submit_slide_by_slide(request).await?;
        self.await_completion(&task_id, config).await
    }
}
