//! Bearer-token claims decoding.
//!
//! The backend signs the JWTs; the client only reads the payload for UI
//! purposes (role gating, greeting text). Signature verification stays
//! server-side. Anything that does not decode cleanly is treated exactly
//! like "not authenticated"; decode failures never escape this module.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Authorization role carried in the access token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Coordinator,
    RescueTeam,
    TeamMember,
    #[default]
    Citizen,
}

impl Role {
    /// Parse a role claim string. Unrecognized values return `None`.
    #[must_use]
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "MANAGER" => Some(Self::Manager),
            "COORDINATOR" => Some(Self::Coordinator),
            "RESCUE_TEAM" => Some(Self::RescueTeam),
            "TEAM_MEMBER" => Some(Self::TeamMember),
            "CITIZEN" => Some(Self::Citizen),
            _ => None,
        }
    }

    /// Wire code, as it appears in token claims and query params.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Coordinator => "COORDINATOR",
            Self::RescueTeam => "RESCUE_TEAM",
            Self::TeamMember => "TEAM_MEMBER",
            Self::Citizen => "CITIZEN",
        }
    }

    /// Human-readable label for headers and the admin user table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Resource Manager",
            Self::Coordinator => "Coordinator",
            Self::RescueTeam => "Rescue Team",
            Self::TeamMember => "Team Member",
            Self::Citizen => "Citizen",
        }
    }
}

/// Identity decoded from the current access token.
///
/// Never persisted on its own; recomputed whenever the stored token
/// changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub subject: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    /// Full claims payload, for anything a view needs beyond the basics.
    pub claims: serde_json::Value,
}

/// Decode the payload segment of a bearer token without verifying the
/// signature.
///
/// Returns `None` for anything that is not a three-part token with a
/// base64url JSON-object payload.
#[must_use]
pub fn decode_identity(token: &str) -> Option<Identity> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    if !claims.is_object() {
        return None;
    }

    Some(Identity {
        subject: claims.get("sub").and_then(|v| v.as_str()).map(ToOwned::to_owned),
        email: claims.get("email").and_then(|v| v.as_str()).map(ToOwned::to_owned),
        role: extract_role(&claims),
        claims,
    })
}

/// Extract the role claim, first match wins: a `roles` array (first
/// element), then a scalar `role`, then a scalar `authority`. Tokens with
/// no recognizable role claim belong to citizens.
#[must_use]
pub fn extract_role(claims: &serde_json::Value) -> Role {
    if let Some(first) = claims
        .get("roles")
        .and_then(|v| v.as_array())
        .and_then(|roles| roles.first())
    {
        return first.as_str().and_then(Role::from_claim).unwrap_or_default();
    }
    if let Some(role) = claims.get("role").and_then(|v| v.as_str()) {
        return Role::from_claim(role).unwrap_or_default();
    }
    if let Some(authority) = claims.get("authority").and_then(|v| v.as_str()) {
        return Role::from_claim(authority).unwrap_or_default();
    }
    Role::Citizen
}
