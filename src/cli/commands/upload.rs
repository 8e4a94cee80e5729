use anyhow::Result;

use super::super::args::UploadCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_upload;
use crate::config::Settings;

pub async fn upload(settings: &Settings, cmd: UploadCommand) -> Result<ExitStatus> {
    let client = settings.client();
    let receipt = client.upload_document(&cmd.file).await?;

    print_upload(&receipt);
    Ok(ExitStatus::Success)
}
