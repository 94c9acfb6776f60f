//! Card click-through to user profiles.

use url::Url;

/// Result of clicking a user card's icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardClick {
    /// Stop propagation, prevent the default action and go to the profile.
    Navigate(Url),
    /// The card carries no user; do nothing.
    Ignore,
}

impl CardClick {
    /// Whether the event's propagation and default action are suppressed.
    pub fn handled(&self) -> bool {
        matches!(self, Self::Navigate(_))
    }
}

/// Resolve a click on a card whose `data-user-id` is `user_id`.
///
/// The ID is pushed as a single percent-encoded path segment under
/// `/profile/` of `origin`.
pub fn card_click(origin: &Url, user_id: Option<&str>) -> CardClick {
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        return CardClick::Ignore;
    };

    let mut url = origin.clone();
    url.set_query(None);
    url.set_fragment(None);
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.clear().push("profile").push(user_id);
        }
        Err(()) => return CardClick::Ignore,
    }
    CardClick::Navigate(url)
}
