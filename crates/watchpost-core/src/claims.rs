// Session claims carried by bearer tokens
// Decision: tokens are self-contained, no server-side session table.
// A leaked token stays usable until natural expiry (no revocation list).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role within an organization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Member => write!(f, "member"),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Member,
        }
    }
}

/// Verified contents of a session token.
///
/// Produced by the token service, consumed by the authorization gate.
/// Never persisted; lifetime equals the token expiry window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Organization id the user belongs to
    pub org: Uuid,
    /// Role within the organization
    pub role: Role,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Tenant-isolation predicate: true only when the identity's organization
    /// exactly matches the resource's organization. Role never widens access.
    pub fn can_access_org(&self, org_id: Uuid) -> bool {
        self.org == org_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(org: Uuid, role: Role) -> Claims {
        Claims {
            sub: Uuid::now_v7(),
            org,
            role,
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_same_org_allowed() {
        let org = Uuid::now_v7();
        assert!(claims_for(org, Role::Member).can_access_org(org));
    }

    #[test]
    fn test_cross_org_denied_regardless_of_role() {
        let org_a = Uuid::now_v7();
        let org_b = Uuid::now_v7();
        assert!(!claims_for(org_a, Role::Admin).can_access_org(org_b));
        assert!(!claims_for(org_a, Role::Member).can_access_org(org_b));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("member"), Role::Member);
        assert_eq!(Role::from("anything-else"), Role::Member);
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
