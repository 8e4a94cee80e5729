use pretty_assertions::assert_eq;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_available_templates_lists_and_counts() {
    let fixture = McpTestFixture::new().await.unwrap();
    let server = fixture.server();

    let result = server.get_available_templates().await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["count"], 2);

    let templates = json_result["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0]["name"], "business");
    assert_eq!(
        templates[0]["images"]["cover"],
        "https://cdn/business-cover.png"
    );
    // A template with no name in the listing falls back to "default".
    assert_eq!(templates[1]["name"], "default");
}
