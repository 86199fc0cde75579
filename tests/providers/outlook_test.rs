//! Outlook tests.

use mailhandoff::providers::MS_OUTLOOK;
use mailhandoff::MailtoIntent;

#[test]
fn empty_intent_yields_bare_recipient_param() {
    let url = MS_OUTLOOK.compose(&MailtoIntent::new()).unwrap();
    assert_eq!(url.as_str(), "ms-outlook://emails/new?to=");
}

#[test]
fn lowercases_capitalized_headers() {
    let intent = MailtoIntent::new()
        .header("TO", "b@x.com")
        .header("SUBJECT", "Hi")
        .header("BODY", "Hello%20there");
    let url = MS_OUTLOOK.compose(&intent).unwrap();
    assert_eq!(
        url.as_str(),
        "ms-outlook://emails/new?to=b@x.com&subject=Hi&body=Hello%20there"
    );
}

#[test]
fn query_pairs_decode() {
    let intent = MailtoIntent::new()
        .to("a@x.com")
        .header("subject", "Hello%20World");
    let url = MS_OUTLOOK.compose(&intent).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("to".to_string(), "a@x.com".to_string()),
            ("subject".to_string(), "Hello World".to_string())
        ]
    );
}
