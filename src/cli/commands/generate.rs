use std::time::Duration;

use anyhow::Result;

use super::super::args::GenerateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_generation, print_generation_failure};
use crate::api::{ApiError, GenerationRequest, PollConfig};
use crate::config::Settings;

pub async fn generate(settings: &Settings, cmd: GenerateCommand) -> Result<ExitStatus> {
    let client = settings.client();

    let mut request = GenerationRequest::new(cmd.text, cmd.length, cmd.template);
    if !cmd.document_uuids.is_empty() {
        request.document_uuids = Some(cmd.document_uuids);
    }

    let config = PollConfig {
        interval: Duration::from_secs(cmd.poll_interval),
        max_wait: Duration::from_secs(cmd.timeout),
        ..PollConfig::default()
    };

    let task_id = client.submit_generate(&request).await?;

    match client.await_completion(&task_id, &config).await {
        Ok(result) => {
            print_generation(&task_id, &result);
            Ok(ExitStatus::Success)
        }
        // The task ended without a presentation; that is a command failure,
        // not an error of this tool.
        Err(err @ (ApiError::GenerationFailed { .. } | ApiError::PollTimeout { .. })) => {
            print_generation_failure(&err);
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
