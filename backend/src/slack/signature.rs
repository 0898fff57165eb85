//! Slack request signature verification
//!
//! Every request Slack sends carries `X-Slack-Request-Timestamp` and
//! `X-Slack-Signature` headers. The signature is `v0=` followed by the hex
//! HMAC-SHA256 of `v0:{timestamp}:{raw body}` keyed with the app's signing
//! secret. Requests older than the replay window are refused.

use ring::hmac;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

const VERSION: &str = "v0";

/// Signature validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureValidation {
    /// Signature is valid
    Valid,
    /// Signature or timestamp is malformed or does not match
    Invalid,
    /// A signing header is missing
    Missing,
    /// Timestamp is outside the replay window
    Stale,
}

impl SignatureValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, SignatureValidation::Valid)
    }
}

/// Verifies signed requests with the app's signing secret
#[derive(Clone)]
pub struct SignatureVerifier {
    key: hmac::Key,
    replay_window_secs: i64,
}

impl SignatureVerifier {
    pub fn new(signing_secret: &SecretString, replay_window_secs: i64) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, signing_secret.expose_secret().as_bytes()),
            replay_window_secs,
        }
    }

    /// Signature header value for a timestamp and body
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut context = hmac::Context::with_key(&self.key);
        context.update(VERSION.as_bytes());
        context.update(b":");
        context.update(timestamp.as_bytes());
        context.update(b":");
        context.update(body);
        format!("{VERSION}={}", hex::encode(context.sign().as_ref()))
    }

    /// Validate a request's signing headers against its raw body
    ///
    /// `now` is the current Unix time in seconds.
    pub fn verify(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        body: &[u8],
        now: i64,
    ) -> SignatureValidation {
        let (Some(timestamp), Some(signature)) = (timestamp, signature) else {
            return SignatureValidation::Missing;
        };

        let Ok(sent_at) = timestamp.trim().parse::<i64>() else {
            return SignatureValidation::Invalid;
        };
        if (now - sent_at).abs() > self.replay_window_secs {
            return SignatureValidation::Stale;
        }

        let expected = self.sign(timestamp.trim(), body);
        if signature.trim().as_bytes().ct_eq(expected.as_bytes()).into() {
            SignatureValidation::Valid
        } else {
            SignatureValidation::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Reference request from Slack's "Verifying requests from Slack" guide
    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const TIMESTAMP: &str = "1531420618";
    const BODY: &str = "token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c";
    const SIGNATURE: &str = "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503";

    fn verifier() -> SignatureVerifier {
        SignatureVerifier::new(&SecretString::new(SECRET.to_string()), 300)
    }

    fn now() -> i64 {
        TIMESTAMP.parse::<i64>().unwrap() + 10
    }

    #[test]
    fn test_reference_signature() {
        assert_eq!(verifier().sign(TIMESTAMP, BODY.as_bytes()), SIGNATURE);
        assert_eq!(
            verifier().verify(Some(TIMESTAMP), Some(SIGNATURE), BODY.as_bytes(), now()),
            SignatureValidation::Valid
        );
    }

    #[test]
    fn test_tampered_body_is_invalid() {
        let body = BODY.replace("roadrunner", "coyote");
        assert_eq!(
            verifier().verify(Some(TIMESTAMP), Some(SIGNATURE), body.as_bytes(), now()),
            SignatureValidation::Invalid
        );
    }

    #[rstest]
    #[case(301)]
    #[case(-301)]
    #[case(86_400)]
    fn test_stale_timestamp(#[case] offset: i64) {
        let now = TIMESTAMP.parse::<i64>().unwrap() + offset;
        assert_eq!(
            verifier().verify(Some(TIMESTAMP), Some(SIGNATURE), BODY.as_bytes(), now),
            SignatureValidation::Stale
        );
    }

    #[test]
    fn test_missing_headers() {
        let v = verifier();
        assert_eq!(v.verify(None, Some(SIGNATURE), BODY.as_bytes(), now()), SignatureValidation::Missing);
        assert_eq!(v.verify(Some(TIMESTAMP), None, BODY.as_bytes(), now()), SignatureValidation::Missing);
    }

    #[test]
    fn test_malformed_timestamp() {
        assert_eq!(
            verifier().verify(Some("yesterday"), Some(SIGNATURE), BODY.as_bytes(), now()),
            SignatureValidation::Invalid
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let other = SignatureVerifier::new(&SecretString::new("not-the-secret".to_string()), 300);
        assert!(!other
            .verify(Some(TIMESTAMP), Some(SIGNATURE), BODY.as_bytes(), now())
            .is_valid());
    }
}
