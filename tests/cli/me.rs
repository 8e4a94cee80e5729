use crate::stub::{api, serve};
use crate::{CliTest, stderr, stdout};

#[test]
fn test_me_shows_account_and_credits() {
    let test = CliTest::new().unwrap();
    let base_url = serve(api());

    let output = test.api_command(&base_url).arg("me").output().unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("account: Jane"));
    assert!(printed.contains("credits: 120"));
}
