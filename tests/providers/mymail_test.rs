//! myMail and Mail.Ru tests.

use mailhandoff::providers::{MAILRU, MYMAIL};
use mailhandoff::{normalize, MailtoIntent};

#[test]
fn subject_and_body_in_input_order() {
    let intent = MailtoIntent::new()
        .header("Subject", "Hi")
        .header("Body", "Hello");
    let url = MYMAIL.compose(&intent).unwrap();
    assert_eq!(url.as_str(), "mymail-mailto://?to=&subject=Hi&body=Hello");
}

#[test]
fn empty_intent_yields_bare_recipient_param() {
    assert_eq!(
        MYMAIL.compose(&MailtoIntent::new()).unwrap().as_str(),
        "mymail-mailto://?to="
    );
    assert_eq!(
        MAILRU.compose(&MailtoIntent::new()).unwrap().as_str(),
        "mailru-mailto://?to="
    );
}

#[test]
fn mailru_differs_only_by_prefix() {
    let intent = MailtoIntent::new()
        .to("a@x.com")
        .header("TO", "b@x.com")
        .header("Subject", "Hi")
        .header("Body", "Hello")
        .header("X-Unknown", "1")
        .header("cc", "c@x.com");
    let request = normalize(&intent);

    let mymail = MYMAIL.render(&request);
    let mailru = MAILRU.render(&request);
    assert_eq!(
        mymail.strip_prefix(MYMAIL.prefix),
        mailru.strip_prefix(MAILRU.prefix)
    );
    assert_eq!(
        mailru,
        "mailru-mailto://?to=a@x.com%2C%20b@x.com&subject=Hi&body=Hello&cc=c@x.com"
    );
}
