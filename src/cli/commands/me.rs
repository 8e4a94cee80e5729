use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::print_account;
use crate::config::Settings;

pub async fn me(settings: &Settings) -> Result<ExitStatus> {
    let client = settings.client();
    let account = client.me().await?;

    print_account(&account);
    Ok(ExitStatus::Success)
}
