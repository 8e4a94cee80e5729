use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::print_templates;
use crate::config::Settings;

pub async fn templates(settings: &Settings) -> Result<ExitStatus> {
    let client = settings.client();
    let templates = client.templates().await?;

    print_templates(&templates);
    Ok(ExitStatus::Success)
}
