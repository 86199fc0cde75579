//! Properties every registered provider shares.

use mailhandoff::providers;
use mailhandoff::{normalize, MailtoIntent, ProviderDescriptor};

#[test]
fn empty_intent_has_no_trailing_separator() {
    for provider in providers::all() {
        let url = provider.compose(&MailtoIntent::new()).unwrap();
        assert_eq!(
            url.as_str(),
            format!("{}{}=", provider.prefix, provider.recipient_param),
            "provider {}",
            provider.id
        );
    }
}

#[test]
fn unsupported_headers_are_never_emitted() {
    let names = [
        "subject", "body", "cc", "bcc", "from", "html", "textbody", "recipient",
        "in-reply-to", "x-mailer", "keywords", "reply-to",
    ];

    for provider in providers::all() {
        for name in names {
            if provider.supports(name) {
                continue;
            }
            let intent = MailtoIntent::new().header(name, "marker");
            let request = normalize(&intent);
            let params = provider.header_params(&request);
            let leaked = format!("{}=marker", name);
            assert!(
                !params.contains(&leaked),
                "provider {} leaked {}",
                provider.id,
                name
            );
        }
    }
}

#[test]
fn supported_body_with_alias_emits_both() {
    const BOTH: ProviderDescriptor = ProviderDescriptor {
        id: "both",
        name: "Both",
        scheme: "both://",
        prefix: "both://compose?",
        body_alias: Some("textbody"),
        ..providers::MS_OUTLOOK
    };

    let url = BOTH
        .compose(&MailtoIntent::new().header("Body", "v"))
        .unwrap();
    assert_eq!(url.as_str(), "both://compose?to=&body=v&textbody=v");
}

#[test]
fn builds_are_independent_across_threads() {
    let intent = MailtoIntent::new()
        .to("a@x.com")
        .header("Subject", "Hi")
        .header("Body", "Hello");
    let expected: Vec<String> = providers::all()
        .iter()
        .map(|p| p.compose(&intent).unwrap().to_string())
        .collect();

    let intent = &intent;
    std::thread::scope(|s| {
        let handles: Vec<_> = providers::all()
            .iter()
            .map(|p| s.spawn(move || p.compose(intent).unwrap().to_string()))
            .collect();
        let actual: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(actual, expected);
    });
}
