//! Property tests for share tokens and links

use codebreaker::core::{AttemptLimit, Mode};
use codebreaker::game::share::{decode, encode, parse_link, share_url};
use codebreaker::game::{LinkError, ShareDescriptor};
use proptest::prelude::*;

fn limit() -> impl Strategy<Value = AttemptLimit> {
    prop_oneof![
        (1..=u32::MAX).prop_map(AttemptLimit::Finite),
        Just(AttemptLimit::Unlimited),
    ]
}

fn descriptor() -> impl Strategy<Value = ShareDescriptor> {
    prop_oneof![
        ("[0-9]{4}", limit()).prop_map(|(answer, max)| ShareDescriptor::new(Mode::Numeric, answer, max)),
        ("[a-z]{5}", limit()).prop_map(|(answer, max)| ShareDescriptor::new(Mode::Lexical, answer, max)),
    ]
}

proptest! {
    #[test]
    fn token_round_trips(descriptor in descriptor()) {
        prop_assert_eq!(decode(&encode(&descriptor)), Some(descriptor));
    }

    #[test]
    fn link_round_trips(descriptor in descriptor()) {
        let url = share_url("https://play.example.com", &descriptor);
        prop_assert_eq!(parse_link(&url), Ok(descriptor));
    }

    #[test]
    fn token_is_url_safe(descriptor in descriptor()) {
        let token = encode(&descriptor);
        prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn decode_never_panics(token in "\\PC*") {
        let _ = decode(&token);
    }

    #[test]
    fn garbage_code_is_invalid_code(token in "[!@*(]{1,12}") {
        prop_assert_eq!(parse_link(&format!("code={token}")), Err(LinkError::InvalidCode));
    }
}

#[test]
fn legacy_parameters_are_accepted() {
    assert_eq!(
        parse_link("/play?mode=word&answer=CRANE&maxAttempts=unlimited"),
        Ok(ShareDescriptor::new(Mode::Lexical, "crane", AttemptLimit::Unlimited))
    );
    assert_eq!(
        parse_link("mode=number&answer=0042&maxAttempts=abc"),
        Ok(ShareDescriptor::new(Mode::Numeric, "0042", AttemptLimit::Finite(10)))
    );
}

#[test]
fn link_errors_are_distinguished() {
    assert_eq!(parse_link("/play"), Err(LinkError::MissingParams));
    assert_eq!(parse_link("mode=number"), Err(LinkError::MissingParams));
    assert_eq!(
        parse_link("mode=colour&answer=12345"),
        Err(LinkError::InvalidCustomGame)
    );
    assert_eq!(
        parse_link("mode=number&answer=12345"),
        Err(LinkError::InvalidCustomGame)
    );
}
