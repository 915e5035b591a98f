use crate::requests::login_requests::{AuthDetails, UserDetails};
use crate::requests::media_reqs::MediaItem;
use yewdux::prelude::*;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user_details: Option<UserDetails>,
    pub auth_details: Option<AuthDetails>,
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct MediaState {
    pub user_media: Vec<MediaItem>,
    pub loading: bool,
}

impl MediaState {
    pub fn find(&self, media_id: &str) -> Option<&MediaItem> {
        self.user_media.iter().find(|m| m.id == media_id)
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct UIState {
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}
