//! Profile domain module.
//!
//! Supplementary descriptive data kept 1:1 with an account. Profiles are
//! created lazily by the provisioning workflow and edited by the owner.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, ProfileId, Timestamp, ValidationError};

/// Maximum length of a social profile URL.
pub const MAX_SOCIAL_URL_LENGTH: usize = 320;

/// Per-account descriptive record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub account_id: AccountId,
    pub bio: Option<String>,
    pub social_profile_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Creates an empty profile for the account.
    pub fn empty(account_id: AccountId) -> Self {
        let now = Timestamp::now();
        Self {
            id: ProfileId::new(),
            account_id,
            bio: None,
            social_profile_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces bio and social link.
    ///
    /// Blank values clear the field.
    ///
    /// # Errors
    ///
    /// `social_profile_url` must be an http(s) URL of at most 320 characters.
    pub fn update(
        &mut self,
        bio: Option<String>,
        social_profile_url: Option<String>,
    ) -> Result<(), ValidationError> {
        let url = match social_profile_url.map(|u| u.trim().to_string()) {
            Some(u) if !u.is_empty() => Some(validate_social_url(u)?),
            _ => None,
        };

        self.bio = bio.filter(|b| !b.trim().is_empty());
        self.social_profile_url = url;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn validate_social_url(url: String) -> Result<String, ValidationError> {
    if url.chars().count() > MAX_SOCIAL_URL_LENGTH {
        return Err(ValidationError::too_long(
            "social_profile_url",
            MAX_SOCIAL_URL_LENGTH,
        ));
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            ValidationError::invalid_format("social_profile_url", "must start with http(s)://")
        })?;
    if rest.is_empty() || rest.starts_with('/') || rest.contains(char::is_whitespace) {
        return Err(ValidationError::invalid_format(
            "social_profile_url",
            "missing host",
        ));
    }
    Ok(url)
}
