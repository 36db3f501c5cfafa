//! `/profile`

use crate::error::{EndpointError, EndpointResult};
use crate::models::{Profile, ProfileUpdate};
use tracing::debug;
use workforce_client::{ApiClient, RequestOptions};

pub const PROFILE_PATH: &str = "/profile";

pub async fn get_profile(client: &ApiClient) -> EndpointResult<Profile> {
    let profile: Profile = client.get(PROFILE_PATH, RequestOptions::default()).await?;
    debug!(profile_id = %profile.id, "Fetched profile");
    Ok(profile)
}

/// Send the set fields of `update` and return the stored profile.
pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> EndpointResult<Profile> {
    let update = normalize_update(update)?;
    let profile: Profile = client
        .put(PROFILE_PATH, Some(&update), RequestOptions::default())
        .await?;
    debug!(profile_id = %profile.id, "Profile updated");
    Ok(profile)
}

fn normalize_update(update: &ProfileUpdate) -> EndpointResult<ProfileUpdate> {
    fn field(name: &str, value: &Option<String>) -> EndpointResult<Option<String>> {
        match value.as_deref().map(str::trim) {
            Some("") => Err(EndpointError::validation(format!("{} cannot be empty", name))),
            other => Ok(other.map(str::to_string)),
        }
    }

    if update.is_empty() {
        return Err(EndpointError::validation("Nothing to update"));
    }
    Ok(ProfileUpdate {
        name: field("Name", &update.name)?,
        phone: field("Phone", &update.phone)?,
        department: field("Department", &update.department)?,
    })
}
