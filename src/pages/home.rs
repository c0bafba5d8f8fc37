use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

use crate::portfolio::{
    Highlight, SocialLink, HOME_HIGHLIGHTS, HOME_INTRO, HOME_SOCIAL_LINKS, HOME_TAGLINE,
    OWNER_NAME, PROFILE_PICTURES_BUCKET,
};
use crate::server::metrics::record_store_request;
use crate::store::DataStore;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomePage {
    pub name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub profile_image: String,
    pub highlights: Vec<Highlight>,
    pub social_links: Vec<SocialLink>,
}

/// Public URL of the first object of the profile pictures bucket, or
/// `default_image` when the bucket is empty or cannot be listed.
pub async fn resolve_profile_image(store: &dyn DataStore, default_image: &str) -> String {
    let start = Instant::now();
    let listing = store.list_objects(PROFILE_PICTURES_BUCKET, "", 1).await;
    record_store_request("list", PROFILE_PICTURES_BUCKET, &listing, start.elapsed());

    match listing {
        Ok(objects) => match objects.first() {
            Some(object) => store.public_url(PROFILE_PICTURES_BUCKET, &object.name),
            None => {
                debug!("No profile picture uploaded, using {}", default_image);
                default_image.to_string()
            }
        },
        Err(err) => {
            warn!("Error loading profile image: {}", err);
            default_image.to_string()
        }
    }
}

pub async fn load_home(store: &dyn DataStore, default_image: &str) -> HomePage {
    HomePage {
        name: OWNER_NAME,
        tagline: HOME_TAGLINE,
        intro: HOME_INTRO,
        profile_image: resolve_profile_image(store, default_image).await,
        highlights: HOME_HIGHLIGHTS.to_vec(),
        social_links: HOME_SOCIAL_LINKS.to_vec(),
    }
}
