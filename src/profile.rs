//! User profile lookups.
//!
//! See <https://developers.facebook.com/docs/messenger-platform/user-profile>.

use serde::{Deserialize, Serialize};

/// Fields requested when looking up a [UserProfile].
pub const PROFILE_FIELDS: &str = "first_name,last_name,profile_pic,locale,timezone,gender";

/// Public profile of a user who messaged the page. Fields the page may not
/// read come back absent and decode as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "profile_pic")]
    pub profile_photo_url: String,
    pub locale: String,
    /// Offset from UTC in hours; may be fractional.
    pub timezone: f64,
    pub gender: String,
}

impl UserProfile {
    /// First and last name joined with a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
