//! Profile service - the locally stored user.

use std::sync::Arc;

use tracing::{info, warn};

use super::{read_slot, write_slot};
use crate::domain::{ProfileView, UserProfile};
use crate::ports::{CoreError, KeyValueStore, slots};

pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored user, if any. An unreadable slot counts as no user.
    pub async fn get(&self) -> Option<UserProfile> {
        read_slot::<UserProfile>(self.store.as_ref(), slots::USER)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Stored profile is unusable, treating as guest");
                None
            })
    }

    /// What the profile screen shows.
    pub async fn view(&self) -> ProfileView {
        ProfileView::from(self.get().await)
    }

    /// Validate and store the user.
    pub async fn save(&self, profile: UserProfile) -> Result<ProfileView, CoreError> {
        let profile = profile.validated()?;
        write_slot(self.store.as_ref(), slots::USER, &profile).await?;
        info!(name = %profile.name, "Saved profile");
        Ok(ProfileView::from(Some(profile)))
    }

    /// Forget the stored user.
    pub async fn clear(&self) -> Result<ProfileView, CoreError> {
        self.store.remove(slots::USER).await?;
        info!("Cleared profile");
        Ok(ProfileView::from(None))
    }
}
