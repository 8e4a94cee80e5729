use crate::stub::{api, serve};
use crate::{CliTest, stderr, stdout};

#[test]
fn test_templates_lists_available_names() {
    let test = CliTest::new().unwrap();
    let base_url = serve(api());

    let output = test
        .api_command(&base_url)
        .arg("templates")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("2 template(s) available"));
    assert!(printed.contains("business"));
    assert!(printed.contains("https://cdn/business-cover.png"));
}
