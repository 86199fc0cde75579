//! Airmail tests.

use mailhandoff::providers::AIRMAIL;
use mailhandoff::MailtoIntent;

#[test]
fn empty_intent_yields_bare_recipient_param() {
    let url = AIRMAIL.compose(&MailtoIntent::new()).unwrap();
    assert_eq!(url.as_str(), "airmail://compose?to=");
}

#[test]
fn body_is_emitted_as_html_body() {
    let intent = MailtoIntent::new()
        .to("a@x.com")
        .header("Subject", "Hi")
        .header("Body", "Hello");
    let url = AIRMAIL.compose(&intent).unwrap();
    assert_eq!(url.as_str(), "airmail://compose?to=a@x.com&subject=Hi&htmlBody=Hello");
}

#[test]
fn from_cc_bcc_pass_through() {
    let intent = MailtoIntent::new()
        .header("From", "me@x.com")
        .header("Cc", "c@x.com")
        .header("Bcc", "b@x.com");
    let url = AIRMAIL.compose(&intent).unwrap();
    assert_eq!(
        url.as_str(),
        "airmail://compose?to=&from=me@x.com&cc=c@x.com&bcc=b@x.com"
    );
}

#[test]
fn unencoded_value_is_malformed() {
    let err = AIRMAIL
        .compose(&MailtoIntent::new().header("subject", "Hi there"))
        .unwrap_err();
    assert!(err.is_malformed_url());
}
