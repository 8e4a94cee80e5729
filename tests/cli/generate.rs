use crate::stub::{api, failing_api, serve};
use crate::{CliTest, stderr, stdout};

#[test]
fn test_generate_prints_the_download_url() {
    let test = CliTest::new().unwrap();
    let base_url = serve(api());

    let output = test
        .api_command(&base_url)
        .args([
            "generate",
            "--text",
            "Q3 Results",
            "--length",
            "10",
            "--template",
            "business",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("Presentation ready"));
    assert!(printed.contains("https://cdn/x.pptx"));
}

#[test]
fn test_failed_generation_exits_with_failure() {
    let test = CliTest::new().unwrap();
    let base_url = serve(failing_api());

    let output = test
        .api_command(&base_url)
        .args(["generate", "--text", "Q3 Results"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("quota exhausted"));
}

#[test]
fn test_zero_timeout_reports_how_to_check_later() {
    let test = CliTest::new().unwrap();
    let base_url = serve(api());

    let output = test
        .api_command(&base_url)
        .args(["generate", "--text", "Q3 Results", "--timeout", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("timed out"));
    assert!(printed.contains("slidespeak-mcp status task-1"));
}

#[test]
fn test_generate_without_a_key_is_an_error() {
    let test = CliTest::new().unwrap();

    let output = test
        .command()
        .args(["generate", "--text", "Q3 Results"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("SLIDESPEAK_API_KEY"));
}

#[test]
fn test_invalid_generate_arguments_never_reach_the_network() {
    let test = CliTest::new().unwrap();

    // Nothing listens on the discard port; validation has to fail first.
    let output = test
        .api_command("http://127.0.0.1:9")
        .args(["generate", "--text", "Q3 Results", "--length", "0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("length"));
}
