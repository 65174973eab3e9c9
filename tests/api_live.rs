//! Live tests against the real Inkflow API.
//!
//! These tests create real (test-mode) signature requests and drafts, so
//! they are all `#[ignore]` and need credentials:
//!
//! ```bash
//! INKFLOW_API_KEY=... INKFLOW_CLIENT_ID=... \
//!     cargo test --test api_live -- --ignored --test-threads=1
//! ```
//!
//! A `.env` file in the crate root works too (loaded via dotenvy).

use std::time::{SystemTime, UNIX_EPOCH};

use inkflow_sdk::prelude::*;

const TEST_FILE_URL: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

fn client() -> InkflowClient {
    let _ = dotenvy::dotenv();
    let api_key = std::env::var("INKFLOW_API_KEY").expect("INKFLOW_API_KEY must be set");
    InkflowClient::builder()
        .api_key(api_key)
        .build()
        .expect("client should build")
}

fn client_id() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("INKFLOW_CLIENT_ID").expect("INKFLOW_CLIENT_ID must be set")
}

/// A field name no template declares, unique per invocation. Reusing the
/// same name across submissions leaves a template draft open server-side
/// and later runs hit the duplicate-request error instead.
fn unique_invalid_field() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("invalid_{nanos}")
}

/// Fetch the first template and start a request against it, CCing every
/// declared CC role.
async fn template_request(client: &InkflowClient) -> (Template, TemplateSignatureRequest) {
    let templates = client
        .templates()
        .list(None)
        .await
        .expect("template list should succeed");
    let template = templates.into_iter().next().expect("account has a template");

    let mut request = TemplateSignatureRequest::new(template.id.clone())
        .test_mode(true)
        .subject("Purchase Order")
        .message("Glad we could come to an agreement.");
    for (i, role) in template.cc_roles.iter().enumerate() {
        request = request.cc(&role.name, format!("oscar{i}@example.com"));
    }
    (template, request)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn create_embedded_signature_request_and_fetch_sign_url() {
    let client = client();

    let request = SignatureRequest::new()
        .test_mode(true)
        .title("Embedded NDA")
        .signer("jack@example.com", "Jack")
        .file_url(TEST_FILE_URL);
    let embedded = EmbeddedSignatureRequest::new(request, client_id());

    let response = client
        .embedded()
        .create(&embedded)
        .await
        .expect("create should succeed");

    assert!(!response.signature_request_id.as_str().is_empty());
    assert!(!response.signatures.is_empty());
    let signature_id = &response.signatures[0].signature_id;
    assert!(!signature_id.as_str().is_empty());

    let sign_url = client
        .embedded()
        .sign_url(signature_id)
        .await
        .expect("sign_url should succeed");
    assert!(!sign_url.sign_url.is_empty());
}

#[tokio::test]
#[ignore]
async fn create_embedded_unclaimed_draft_returns_claim_url() {
    let client = client();

    let request = SignatureRequest::new()
        .test_mode(true)
        .requester_email_address("jolene@example.com")
        .file_url(TEST_FILE_URL);
    let draft = UnclaimedDraft::embedded(request, client_id())
        .draft_type(DraftType::RequestSignature);

    let response = client
        .unclaimed_drafts()
        .create(&draft)
        .await
        .expect("draft create should succeed");
    assert!(!response.claim_url.is_empty());
}

#[tokio::test]
#[ignore]
async fn create_embedded_unclaimed_draft_for_embedded_signing() {
    let client = client();

    let request = SignatureRequest::new()
        .test_mode(true)
        .requester_email_address("jolene@example.com")
        .file_url(TEST_FILE_URL);
    let draft = UnclaimedDraft::embedded(request, client_id())
        .draft_type(DraftType::RequestSignature)
        .is_for_embedded_signing(true);

    let response = client
        .unclaimed_drafts()
        .create(&draft)
        .await
        .expect("draft create should succeed");
    assert!(!response.claim_url.is_empty());
}

#[tokio::test]
#[ignore]
async fn create_embedded_signature_request_with_template() {
    let client = client();
    let (template, mut request) = template_request(&client).await;

    for (i, role) in template.signer_roles.iter().enumerate() {
        request = request.signer(
            &role.name,
            format!("george{i}@example.com"),
            format!("George {}", role.name),
        );
    }
    for field in &template.custom_fields {
        request = request.custom_field(&field.name, "My String");
    }

    let embedded = EmbeddedSignatureRequest::new(request, client_id());
    let response = client
        .embedded()
        .create(&embedded)
        .await
        .expect("create should succeed");

    assert!(!response.signature_request_id.as_str().is_empty());
    assert!(!response.signatures[0].signature_id.as_str().is_empty());
}

#[tokio::test]
#[ignore]
async fn invalid_custom_field_is_rejected_by_name() {
    let client = client();
    let (template, mut request) = template_request(&client).await;

    for (i, role) in template.signer_roles.iter().enumerate() {
        request = request.signer(
            &role.name,
            format!("george{i}@example.com"),
            format!("George {}", role.name),
        );
    }
    for field in &template.custom_fields {
        request = request.custom_field(&field.name, "My String");
    }
    request = request.custom_field("invalid_field", "My String");

    // The local validator and the server agree on the message.
    let local = template
        .validate_custom_fields(request.custom_field_names())
        .unwrap_err();
    assert_eq!(local.to_string(), "Invalid custom field: invalid_field");

    let embedded = EmbeddedSignatureRequest::new(request, client_id());
    let err = client.embedded().create(&embedded).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid custom field: invalid_field");
    assert!(matches!(
        err,
        SdkError::InvalidCustomField { field } if field == "invalid_field"
    ));
}

#[tokio::test]
#[ignore]
async fn malformed_response_with_missing_signer_roles() {
    let client = client();
    let (template, mut request) = template_request(&client).await;

    assert!(
        template.signer_roles.len() >= 2,
        "template must declare at least two signer roles for this test"
    );

    // Fill only the first role; combined with an unknown custom field the
    // server errors out before producing a JSON body.
    let role = &template.signer_roles[0];
    request = request.signer(&role.name, "george@example.com", format!("George {}", role.name));
    for field in &template.custom_fields {
        request = request.custom_field(&field.name, "My String");
    }
    request = request.custom_field(unique_invalid_field(), "My String");

    let embedded = EmbeddedSignatureRequest::new(request, client_id());
    let err = client.embedded().create(&embedded).await.unwrap_err();
    assert_eq!(err.to_string(), "Response should be returned in JSON format");
}

#[tokio::test]
#[ignore]
async fn resubmitting_the_same_malformed_request_hits_duplicate_detection() {
    let client = client();
    let (template, mut request) = template_request(&client).await;

    assert!(
        template.signer_roles.len() >= 2,
        "template must declare at least two signer roles for this test"
    );

    let role = &template.signer_roles[0];
    request = request.signer(&role.name, "george@example.com", format!("George {}", role.name));
    for field in &template.custom_fields {
        request = request.custom_field(&field.name, "My String");
    }
    // The same unique field both times: the first call errors out leaving a
    // template draft open, the retry is flagged as an identical in-flight
    // request.
    request = request.custom_field(unique_invalid_field(), "My String");

    let embedded = EmbeddedSignatureRequest::new(request, client_id());

    let first = client.embedded().create(&embedded).await.unwrap_err();
    assert_eq!(
        first.to_string(),
        "Response should be returned in JSON format"
    );

    let second = client.embedded().create(&embedded).await.unwrap_err();
    assert!(matches!(second, SdkError::DuplicateRequest));
    assert_eq!(
        second.to_string(),
        "An identical request is already being processed."
    );
}

#[tokio::test]
#[ignore]
async fn templates_list_returns_declared_roles() {
    let client = client();
    let templates = client
        .templates()
        .list(None)
        .await
        .expect("template list should succeed");
    let template = templates.first().expect("account has a template");
    assert!(!template.id.as_str().is_empty());
    assert!(!template.signer_roles.is_empty());
}
