//! Spark tests.

use mailhandoff::providers::READDLE_SPARK;
use mailhandoff::MailtoIntent;

#[test]
fn empty_intent_yields_bare_recipient_param() {
    let url = READDLE_SPARK.compose(&MailtoIntent::new()).unwrap();
    assert_eq!(url.as_str(), "readdle-spark://compose?recipient=");
}

#[test]
fn body_is_emitted_as_textbody_only() {
    let url = READDLE_SPARK
        .compose(&MailtoIntent::new().header("body", "hello"))
        .unwrap();
    assert!(url.as_str().contains("textbody=hello"));
    assert_eq!(url.as_str(), "readdle-spark://compose?recipient=&textbody=hello");
}

#[test]
fn full_intent() {
    let intent = MailtoIntent::new()
        .to("a@x.com")
        .header("to", "b@x.com")
        .header("Subject", "Hi")
        .header("Body", "Hello")
        .header("BCC", "z@x.com")
        .header("In-Reply-To", "%3Cid%40x%3E");

    let url = READDLE_SPARK.compose(&intent).unwrap();
    assert_eq!(
        url.as_str(),
        "readdle-spark://compose?recipient=a@x.com%2C%20b@x.com&subject=Hi&textbody=Hello&bcc=z@x.com"
    );
}

#[test]
fn textbody_header_and_body_both_emit_textbody() {
    let intent = MailtoIntent::new()
        .header("textbody", "raw")
        .header("body", "aliased");
    let url = READDLE_SPARK.compose(&intent).unwrap();
    assert_eq!(
        url.as_str(),
        "readdle-spark://compose?recipient=&textbody=raw&textbody=aliased"
    );
}
