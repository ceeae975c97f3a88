//! Tests for pagination seams

use super::*;
use test_case::test_case;

#[test_case("" => true; "empty string is empty token")]
#[test_case("t1" => false; "non-empty string is a real token")]
#[test_case("  " => false; "whitespace is opaque, not empty")]
fn test_page_token_is_empty(raw: &str) -> bool {
    PageToken::from(raw).is_empty()
}

#[test]
fn test_page_token_default_is_empty() {
    assert!(PageToken::default().is_empty());
    assert_eq!(PageToken::default(), PageToken::empty());
}

#[test]
fn test_page_token_from_option_normalizes() {
    assert!(PageToken::from_option(None).is_empty());
    assert!(PageToken::from_option(Some(String::new())).is_empty());

    let token = PageToken::from_option(Some("t1".to_string()));
    assert_eq!(token.as_str(), "t1");
}

#[test]
fn test_page_token_round_trip() {
    let token = PageToken::new("CgYKBHRlc3Q=");
    assert_eq!(token.to_string(), "CgYKBHRlc3Q=");
    assert_eq!(token.clone().into_inner(), "CgYKBHRlc3Q=");
    assert_eq!(token.as_ref(), "CgYKBHRlc3Q=");
}

#[test]
fn test_page_token_serde_transparent() {
    let token: PageToken = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(token, PageToken::new("abc"));

    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, "\"abc\"");
}

#[test]
fn test_has_next_page_default_impl() {
    struct Stub(PageToken);

    impl Page for Stub {
        type Item = ();

        fn next_page_token(&self) -> &PageToken {
            &self.0
        }

        fn items(&self) -> &[()] {
            &[]
        }

        fn into_items(self) -> Vec<()> {
            Vec::new()
        }
    }

    assert!(Stub(PageToken::new("t1")).has_next_page());
    assert!(!Stub(PageToken::empty()).has_next_page());
}
