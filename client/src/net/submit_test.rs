use super::*;

#[test]
fn payload_trims_every_field() {
    let fields = ContactFields {
        name: "  Ada ".to_owned(),
        email: " ada@example.com\n".to_owned(),
        subject: "\tHello".to_owned(),
        message: " A message long enough. ".to_owned(),
    };
    let payload = ContactPayload::from_fields(&fields);
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.subject, "Hello");
    assert_eq!(payload.message, "A message long enough.");
}

#[test]
fn payload_serializes_with_field_names() {
    let payload = ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello there!".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).ok(),
        Some(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello there!",
        }))
    );
}

#[test]
fn simulated_submitter_defaults_to_two_seconds() {
    assert_eq!(SimulatedSubmitter::default().delay_ms, 2000);
}

#[test]
fn simulated_submitter_always_succeeds() {
    let payload = ContactPayload::from_fields(&ContactFields::default());
    let outcome = futures::executor::block_on(SimulatedSubmitter::default().submit(&payload));
    assert_eq!(outcome, Ok(()));
}

#[test]
fn submit_error_message() {
    assert_eq!(SubmitError::Rejected("spam".to_owned()).to_string(), "submission rejected: spam");
}
