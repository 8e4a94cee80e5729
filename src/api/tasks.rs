//! Task status polling.
//!
//! Generation runs asynchronously upstream. After submitting a request the
//! client holds a [`TaskHandle`] and repeatedly fetches the task status
//! until it reaches a terminal state or the polling budget runs out.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::error::{ApiError, Result};
use super::types::{GenerationResult, TaskHandle, TaskState, TaskStatusReport};
use super::{
    GENERATION_TIMEOUT, POLLING_INTERVAL, POLLING_TIMEOUT, SlideSpeakClient, handle_response,
};

/// How a task is polled while waiting for it to finish.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between two status polls.
    pub interval: Duration,
    /// Total waiting budget. Once spent, waiting stops with a timeout and
    /// no further poll is issued.
    pub max_wait: Duration,
    /// Consecutive failed polls tolerated before the wait is abandoned.
    pub failure_tolerance: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLLING_INTERVAL,
            max_wait: GENERATION_TIMEOUT,
            failure_tolerance: 3,
        }
    }
}

impl SlideSpeakClient {
    /// Fetch the current status of a generation task.
    pub async fn task_status(&self, task_id: &TaskHandle) -> Result<TaskStatusReport> {
        let response = self
            .get(&format!("/task_status/{task_id}"), POLLING_TIMEOUT)
            .send()
            .await?;
        handle_response(response).await
    }

    /// Wait for a task to finish, polling its status at a fixed interval.
    ///
    /// Returns [`ApiError::PollTimeout`] once `config.max_wait` is spent.
    /// The task itself keeps running upstream and can still be inspected
    /// with [`task_status`](Self::task_status) afterwards.
    pub async fn await_completion(
        &self,
        task_id: &TaskHandle,
        config: &PollConfig,
    ) -> Result<GenerationResult> {
        poll_until_terminal(task_id, config, || self.task_status(task_id)).await
    }
}

/// Drive `poll` until the task reaches a terminal state or the budget runs
/// out.
///
/// The budget is checked before every poll, so a zero budget polls zero
/// times. Transient poll failures are retried silently until
/// `failure_tolerance` consecutive failures accumulate; any successful
/// poll resets the count. Unrecognized states count as still-running so
/// that a new upstream state cannot abort a wait that may yet succeed.
async fn poll_until_terminal<F, Fut>(
    task_id: &TaskHandle,
    config: &PollConfig,
    mut poll: F,
) -> Result<GenerationResult>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskStatusReport>>,
{
    let started = Instant::now();
    let mut consecutive_failures: u32 = 0;
    loop {
        let waited = started.elapsed();
        if waited >= config.max_wait {
            warn!(task_id = %task_id, ?waited, "gave up waiting for task");
            return Err(ApiError::PollTimeout {
                task_id: task_id.to_string(),
                waited,
            });
        }
        match poll().await {
            Ok(report) => {
                consecutive_failures = 0;
                match &report.task_status {
                    TaskState::Success => {
                        info!(task_id = %task_id, "task finished");
                        return report.into_result();
                    }
                    TaskState::Failure => {
                        let detail = report.failure_detail();
                        error!(task_id = %task_id, detail = %detail, "task failed");
                        return Err(ApiError::GenerationFailed {
                            task_id: task_id.to_string(),
                            detail,
                        });
                    }
                    TaskState::Pending | TaskState::Sent | TaskState::Processing => {
                        debug!(
                            task_id = %task_id,
                            state = %report.task_status,
                            "task still running"
                        );
                    }
                    TaskState::Other(raw) => {
                        warn!(
                            task_id = %task_id,
                            state = %raw,
                            "unrecognized task state, still waiting"
                        );
                    }
                }
            }
            Err(err) if err.is_transient() => {
                consecutive_failures += 1;
                if consecutive_failures > config.failure_tolerance {
                    error!(
                        task_id = %task_id,
                        failures = consecutive_failures,
                        "giving up after repeated poll failures"
                    );
                    return Err(err);
                }
                warn!(task_id = %task_id, error = %err, "status poll failed, will retry");
            }
            Err(err) => return Err(err),
        }
        tokio::time::sleep(config.interval).await;
    }
}
