use opsdesk_models::users::UserRole;
use serde::{Deserialize, Serialize};

// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: String,
    pub email: String,
    /// Role frozen at issuance. A role change on the identity takes effect
    /// only when a new token is issued.
    pub role: UserRole,
    /// Expiration timestamp (Unix seconds, exclusive)
    pub exp: usize,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_roundtrip() {
        let claims = Claims {
            sub: "user-id-123".to_string(),
            email: "test@opsdesk.test".to_string(),
            role: UserRole::Manager,
            exp: 1234567890,
            iat: 1234564290,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""role":"manager""#));

        let back: Claims = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.role, UserRole::Manager);
    }

    #[test]
    fn test_claims_reject_unknown_role() {
        let json = r#"{"sub":"x","email":"a@b.c","role":"root","exp":1,"iat":0}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
