use std::time::Duration;

use anyhow::Result;

use super::super::args::StatusCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_generation, print_generation_failure, print_status};
use crate::api::{ApiError, PollConfig, TaskHandle, TaskState};
use crate::config::Settings;

pub async fn status(settings: &Settings, cmd: StatusCommand) -> Result<ExitStatus> {
    let client = settings.client();
    let task_id = TaskHandle::from(cmd.task_id);

    if cmd.wait {
        let config = PollConfig {
            max_wait: Duration::from_secs(cmd.timeout),
            ..PollConfig::default()
        };
        return match client.await_completion(&task_id, &config).await {
            Ok(result) => {
                print_generation(&task_id, &result);
                Ok(ExitStatus::Success)
            }
            Err(err @ (ApiError::GenerationFailed { .. } | ApiError::PollTimeout { .. })) => {
                print_generation_failure(&err);
                Ok(ExitStatus::Failure)
            }
            Err(err) => Err(err.into()),
        };
    }

    let report = client.task_status(&task_id).await?;

    let failed = report.task_status == TaskState::Failure;
    print_status(&report);

    if failed {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
