use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

const BEARER_PREFIX: &str = "Bearer ";
const FALLBACK_PRINCIPAL_ID: &str = "user";

/// Claims carried by a verified token. Registered claims we care about are
/// named; everything else is kept so the full payload can be serialized
/// back into the authorizer context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Claims {
    pub fn principal_id(&self) -> String {
        self.sub
            .clone()
            .unwrap_or_else(|| FALLBACK_PRINCIPAL_ID.to_string())
    }
}

/// Returns the token following the literal `Bearer ` prefix, or `None` if
/// the prefix is absent or nothing follows it.
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    authorization
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.is_empty())
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait TokenVerifier {
    fn verify(&self, token: &str) -> Result<Claims, String>;
}

/// Verifies HS256 tokens against a shared secret. Every call re-verifies;
/// no decision or claims caching happens across invocations.
pub struct HmacTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacTokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced when the claim is present, but tokens without
        // an exp claim are accepted.
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for HmacTokenVerifier {
    fn verify(&self, token: &str) -> Result<Claims, String> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Token verification failed: {:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    const TEST_SECRET: &str = "test-signing-secret";

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_claims_with_subject() {
        let token = sign(
            &Claims {
                sub: Some("user-123".to_string()),
                exp: Some(now_secs() + 3600),
                extra: HashMap::new(),
            },
            TEST_SECRET,
        );
        let verifier = HmacTokenVerifier::new(TEST_SECRET);

        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("user-123"));
        assert_eq!(claims.principal_id(), "user-123");
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let token = sign(
            &Claims {
                sub: Some("user-123".to_string()),
                exp: None,
                extra: HashMap::new(),
            },
            TEST_SECRET,
        );
        let verifier = HmacTokenVerifier::new(TEST_SECRET);

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(
            &Claims {
                sub: Some("user-123".to_string()),
                exp: Some(now_secs() - 3600),
                extra: HashMap::new(),
            },
            TEST_SECRET,
        );
        let verifier = HmacTokenVerifier::new(TEST_SECRET);

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = sign(
            &Claims {
                sub: Some("user-123".to_string()),
                exp: Some(now_secs() + 3600),
                extra: HashMap::new(),
            },
            "some-other-secret",
        );
        let verifier = HmacTokenVerifier::new(TEST_SECRET);

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        let verifier = HmacTokenVerifier::new(TEST_SECRET);

        assert!(verifier.verify("not.a.token").is_err());
    }

    #[test]
    fn principal_id_falls_back_when_subject_missing() {
        let claims = Claims {
            sub: None,
            exp: None,
            extra: HashMap::new(),
        };

        assert_eq!(claims.principal_id(), "user");
    }

    #[test]
    fn bearer_token_is_extracted_after_literal_prefix() {
        assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("abc123"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("bearer abc123"), None);
        assert_eq!(extract_bearer_token(""), None);
    }
}
