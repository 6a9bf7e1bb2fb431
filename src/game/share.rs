//! Shareable custom puzzles
//!
//! A [`ShareDescriptor`] is turned into a URL-safe token in three stages:
//! the attempt budget is swapped for its wire value (unlimited becomes the
//! `"unlimited"` sentinel, which no integer can collide with), the result is
//! serialized as JSON, and the bytes are base64-encoded with the URL-safe
//! alphabet and no padding. Decoding runs the stages in reverse and turns
//! every failure into `None`.

use super::error::DescriptorError;
use crate::core::{AttemptLimit, Code, Mode};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::fmt;

const UNLIMITED_SENTINEL: &str = "unlimited";

/// Budget used by links that do not carry one
pub const DEFAULT_LINK_ATTEMPTS: AttemptLimit = AttemptLimit::Finite(10);

/// The minimal data needed to rebuild a custom game elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDescriptor {
    pub mode: Mode,
    pub answer: String,
    pub max_attempts: AttemptLimit,
}

impl ShareDescriptor {
    pub fn new(mode: Mode, answer: impl Into<String>, max_attempts: AttemptLimit) -> Self {
        Self {
            mode,
            answer: answer.into(),
            max_attempts,
        }
    }

    /// Check the answer against the mode and normalize it
    ///
    /// # Errors
    /// Returns `DescriptorError` if the answer does not fit the mode's length
    /// or alphabet, or if the budget is `Finite(0)`.
    pub fn validated(self) -> Result<Self, DescriptorError> {
        let answer = Code::parse(self.mode, &self.answer).map_err(DescriptorError::InvalidAnswer)?;
        if self.max_attempts == AttemptLimit::Finite(0) {
            return Err(DescriptorError::ZeroAttempts);
        }
        Ok(Self {
            answer: answer.into_string(),
            ..self
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireLimit {
    Count(u32),
    Sentinel(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDescriptor {
    mode: Mode,
    answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_attempts: Option<WireLimit>,
}

fn limit_to_wire(limit: AttemptLimit) -> WireLimit {
    match limit {
        AttemptLimit::Finite(max) => WireLimit::Count(max),
        AttemptLimit::Unlimited => WireLimit::Sentinel(UNLIMITED_SENTINEL.to_string()),
    }
}

fn limit_from_wire(wire: Option<WireLimit>) -> Option<AttemptLimit> {
    match wire {
        None => Some(DEFAULT_LINK_ATTEMPTS),
        Some(WireLimit::Count(max)) => Some(AttemptLimit::Finite(max)),
        Some(WireLimit::Sentinel(text)) if text == UNLIMITED_SENTINEL => {
            Some(AttemptLimit::Unlimited)
        }
        Some(WireLimit::Sentinel(_)) => None,
    }
}

/// Encode a descriptor as a URL-safe token
///
/// # Panics
/// Will not panic - the wire struct holds only strings and integers.
///
/// # Examples
/// ```
/// use codebreaker::core::{AttemptLimit, Mode};
/// use codebreaker::game::share::{ShareDescriptor, decode, encode};
///
/// let descriptor = ShareDescriptor::new(Mode::Numeric, "4821", AttemptLimit::Unlimited);
/// assert_eq!(decode(&encode(&descriptor)), Some(descriptor));
/// ```
#[must_use]
pub fn encode(descriptor: &ShareDescriptor) -> String {
    let wire = WireDescriptor {
        mode: descriptor.mode,
        answer: descriptor.answer.clone(),
        max_attempts: Some(limit_to_wire(descriptor.max_attempts)),
    };
    let json = serde_json::to_vec(&wire).expect("wire descriptor always serializes");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a token produced by [`encode`]
///
/// Returns `None` for anything malformed. The answer's shape is not checked
/// here; see [`ShareDescriptor::validated`].
#[must_use]
pub fn decode(token: &str) -> Option<ShareDescriptor> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
    let wire: WireDescriptor = serde_json::from_slice(&bytes).ok()?;
    Some(ShareDescriptor {
        mode: wire.mode,
        answer: wire.answer,
        max_attempts: limit_from_wire(wire.max_attempts)?,
    })
}

/// Build the link players open to start a custom game
#[must_use]
pub fn share_url(base_url: &str, descriptor: &ShareDescriptor) -> String {
    format!(
        "{}/play?code={}",
        base_url.trim_end_matches('/'),
        encode(descriptor)
    )
}

/// Why a link could not be turned into a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// `code` was present but did not decode
    InvalidCode,
    /// Neither `code` nor `mode` + `answer` were given
    MissingParams,
    /// Unknown mode, or an answer that does not fit it
    InvalidCustomGame,
}

impl LinkError {
    /// Short machine-readable name, as used in error redirects
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCode => "invalid-code",
            Self::MissingParams => "missing-params",
            Self::InvalidCustomGame => "invalid-custom-game",
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode => write!(f, "The game code in this link is not valid"),
            Self::MissingParams => write!(f, "The link does not describe a game"),
            Self::InvalidCustomGame => write!(f, "The custom game in this link is not valid"),
        }
    }
}

impl std::error::Error for LinkError {}

/// Query parameters a share link may carry
///
/// Values arrive percent-decoded (`%43` and `+` included).
#[derive(Debug, Default, Deserialize)]
struct LinkQuery {
    code: Option<String>,
    mode: Option<String>,
    answer: Option<String>,
    #[serde(rename = "maxAttempts")]
    max_attempts: Option<String>,
}

/// Parse the query part of a share link (or a whole URL)
///
/// `code=<token>` takes priority. Without it the legacy `mode`, `answer` and
/// `maxAttempts` parameters are read; `mode` must be exactly `number` or
/// `word`, and a missing or unparsable `maxAttempts` means 10.
///
/// # Errors
/// Returns a `LinkError` describing which check failed.
pub fn parse_link(input: &str) -> Result<ShareDescriptor, LinkError> {
    let query = input
        .split_once('?')
        .map_or(input, |(_, query)| query)
        .split('#')
        .next()
        .unwrap_or_default();

    // Repeated keys make the link ambiguous
    let params: LinkQuery =
        serde_urlencoded::from_str(query).map_err(|_| LinkError::InvalidCustomGame)?;
    let present = |value: Option<String>| value.filter(|value| !value.is_empty());

    let descriptor = if let Some(code) = present(params.code) {
        decode(&code).ok_or(LinkError::InvalidCode)?
    } else {
        let (Some(mode), Some(answer)) = (present(params.mode), present(params.answer)) else {
            return Err(LinkError::MissingParams);
        };
        let mode = Mode::from_link_name(&mode).ok_or(LinkError::InvalidCustomGame)?;
        let max_attempts = match present(params.max_attempts).as_deref() {
            Some(UNLIMITED_SENTINEL) => AttemptLimit::Unlimited,
            Some(value) => value
                .parse()
                .map_or(DEFAULT_LINK_ATTEMPTS, AttemptLimit::Finite),
            None => DEFAULT_LINK_ATTEMPTS,
        };
        ShareDescriptor::new(mode, answer, max_attempts)
    };

    descriptor
        .validated()
        .map_err(|_| LinkError::InvalidCustomGame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_unlimited() {
        let descriptor = ShareDescriptor::new(Mode::Numeric, "4821", AttemptLimit::Unlimited);
        assert_eq!(decode(&encode(&descriptor)), Some(descriptor));
    }

    #[test]
    fn round_trip_finite_word() {
        let descriptor = ShareDescriptor::new(Mode::Lexical, "crane", AttemptLimit::Finite(6));
        assert_eq!(decode(&encode(&descriptor)), Some(descriptor));
    }

    #[test]
    fn token_is_url_safe() {
        let descriptor = ShareDescriptor::new(Mode::Lexical, "zesty", AttemptLimit::Finite(250));
        let token = encode(&descriptor);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn sentinel_differs_from_every_count() {
        let unlimited = encode(&ShareDescriptor::new(
            Mode::Numeric,
            "0000",
            AttemptLimit::Unlimited,
        ));
        let huge = encode(&ShareDescriptor::new(
            Mode::Numeric,
            "0000",
            AttemptLimit::Finite(u32::MAX),
        ));
        assert_ne!(unlimited, huge);
        assert_eq!(
            decode(&huge).map(|d| d.max_attempts),
            Some(AttemptLimit::Finite(u32::MAX))
        );
    }

    #[test]
    fn garbage_decodes_to_none() {
        assert_eq!(decode("not-a-valid-token"), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("!!!"), None);
    }

    #[test]
    fn valid_base64_wrong_json_is_none() {
        let token = URL_SAFE_NO_PAD.encode(br#"{"mode":"number"}"#);
        assert_eq!(decode(&token), None);

        let token = URL_SAFE_NO_PAD.encode(br#"{"mode":"chess","answer":"e4e5"}"#);
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn unknown_sentinel_is_none() {
        let token =
            URL_SAFE_NO_PAD.encode(br#"{"mode":"number","answer":"1234","maxAttempts":"lots"}"#);
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn missing_or_null_budget_defaults_to_ten() {
        for json in [
            br#"{"mode":"word","answer":"crane"}"#.as_slice(),
            br#"{"mode":"word","answer":"crane","maxAttempts":null}"#.as_slice(),
        ] {
            let token = URL_SAFE_NO_PAD.encode(json);
            assert_eq!(
                decode(&token).map(|d| d.max_attempts),
                Some(AttemptLimit::Finite(10))
            );
        }
    }

    #[test]
    fn validated_normalizes_answer() {
        let descriptor = ShareDescriptor::new(Mode::Lexical, "CRANE", AttemptLimit::Finite(3))
            .validated()
            .unwrap();
        assert_eq!(descriptor.answer, "crane");
    }

    #[test]
    fn validated_rejects_bad_shapes() {
        assert!(matches!(
            ShareDescriptor::new(Mode::Numeric, "12345", AttemptLimit::Unlimited).validated(),
            Err(DescriptorError::InvalidAnswer(_))
        ));
        assert!(matches!(
            ShareDescriptor::new(Mode::Lexical, "abc1e", AttemptLimit::Unlimited).validated(),
            Err(DescriptorError::InvalidAnswer(_))
        ));
        assert_eq!(
            ShareDescriptor::new(Mode::Numeric, "1234", AttemptLimit::Finite(0)).validated(),
            Err(DescriptorError::ZeroAttempts)
        );
    }

    #[test]
    fn link_with_code() {
        let descriptor = ShareDescriptor::new(Mode::Numeric, "4821", AttemptLimit::Unlimited);
        let url = share_url("https://example.com/", &descriptor);
        assert!(url.starts_with("https://example.com/play?code="));
        assert_eq!(parse_link(&url), Ok(descriptor));
    }

    #[test]
    fn link_code_takes_priority_over_legacy() {
        let descriptor = ShareDescriptor::new(Mode::Lexical, "crane", AttemptLimit::Finite(4));
        let query = format!("mode=number&answer=1234&code={}", encode(&descriptor));
        assert_eq!(parse_link(&query), Ok(descriptor));
    }

    #[test]
    fn link_with_bad_code() {
        assert_eq!(parse_link("code=zzzz"), Err(LinkError::InvalidCode));
    }

    #[test]
    fn legacy_link_params() {
        assert_eq!(
            parse_link("/play?mode=word&answer=Crane&maxAttempts=6"),
            Ok(ShareDescriptor::new(
                Mode::Lexical,
                "crane",
                AttemptLimit::Finite(6)
            ))
        );
        assert_eq!(
            parse_link("mode=number&answer=0042"),
            Ok(ShareDescriptor::new(
                Mode::Numeric,
                "0042",
                AttemptLimit::Finite(10)
            ))
        );
        assert_eq!(
            parse_link("mode=number&answer=0042&maxAttempts=abc"),
            Ok(ShareDescriptor::new(
                Mode::Numeric,
                "0042",
                AttemptLimit::Finite(10)
            ))
        );
        assert_eq!(
            parse_link("mode=number&answer=0042&maxAttempts=unlimited"),
            Ok(ShareDescriptor::new(
                Mode::Numeric,
                "0042",
                AttemptLimit::Unlimited
            ))
        );
    }

    #[test]
    fn legacy_link_missing_params() {
        assert_eq!(parse_link(""), Err(LinkError::MissingParams));
        assert_eq!(parse_link("mode=word"), Err(LinkError::MissingParams));
        assert_eq!(
            parse_link("https://example.com/play?answer=crane"),
            Err(LinkError::MissingParams)
        );
    }

    #[test]
    fn legacy_link_invalid_game() {
        assert_eq!(
            parse_link("mode=chess&answer=crane"),
            Err(LinkError::InvalidCustomGame)
        );
        assert_eq!(
            parse_link("mode=number&answer=crane"),
            Err(LinkError::InvalidCustomGame)
        );
        assert_eq!(
            parse_link("mode=word&answer=crane&maxAttempts=0"),
            Err(LinkError::InvalidCustomGame)
        );
    }

    #[test]
    fn legacy_link_mode_uses_link_names_only() {
        for alias in ["n", "w", "numeric", "lexical", "WORD"] {
            assert_eq!(
                parse_link(&format!("mode={alias}&answer=1234")),
                Err(LinkError::InvalidCustomGame),
                "{alias}"
            );
        }
    }

    #[test]
    fn legacy_link_values_are_percent_decoded() {
        assert_eq!(
            parse_link("/play?mode=word&answer=%43RANE&maxAttempts=%36"),
            Ok(ShareDescriptor::new(
                Mode::Lexical,
                "crane",
                AttemptLimit::Finite(6)
            ))
        );
        assert_eq!(
            parse_link("mode=number&answer=+0042+"),
            Ok(ShareDescriptor::new(
                Mode::Numeric,
                "0042",
                AttemptLimit::Finite(10)
            ))
        );
    }

    #[test]
    fn repeated_parameters_are_rejected() {
        assert_eq!(
            parse_link("mode=word&answer=crane&answer=slate"),
            Err(LinkError::InvalidCustomGame)
        );
    }

    #[test]
    fn link_error_codes() {
        assert_eq!(LinkError::InvalidCode.code(), "invalid-code");
        assert_eq!(LinkError::MissingParams.code(), "missing-params");
        assert_eq!(LinkError::InvalidCustomGame.code(), "invalid-custom-game");
    }
}
