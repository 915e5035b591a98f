use std::rc::Rc;

use crate::components::context::{MediaState, UIState};
use crate::components::gen_funcs::format_error_message;
use crate::requests::login_requests::AuthDetails;
use crate::requests::media_reqs::{self, MediaItem};
use yewdux::prelude::*;

pub enum MediaStateMsg {
    FetchStarted,
    FetchSucceeded(Vec<MediaItem>),
    FetchFailed,
    Removed(String),
}

impl Reducer<MediaState> for MediaStateMsg {
    fn apply(self, mut state: Rc<MediaState>) -> Rc<MediaState> {
        let state_mut = Rc::make_mut(&mut state);

        match self {
            MediaStateMsg::FetchStarted => {
                state_mut.loading = true;
            }
            MediaStateMsg::FetchSucceeded(media) => {
                state_mut.user_media = media;
                state_mut.loading = false;
            }
            MediaStateMsg::FetchFailed => {
                state_mut.loading = false;
            }
            MediaStateMsg::Removed(media_id) => {
                state_mut.user_media.retain(|m| m.id != media_id);
            }
        }

        state
    }
}

pub enum UIStateMsg {
    SetError(String),
    SetInfo(String),
    ClearErrorMessage,
    ClearInfoMessage,
}

impl Reducer<UIState> for UIStateMsg {
    fn apply(self, mut state: Rc<UIState>) -> Rc<UIState> {
        let state_mut = Rc::make_mut(&mut state);

        match self {
            UIStateMsg::SetError(message) => state_mut.error_message = Some(message),
            UIStateMsg::SetInfo(message) => state_mut.info_message = Some(message),
            UIStateMsg::ClearErrorMessage => state_mut.error_message = None,
            UIStateMsg::ClearInfoMessage => state_mut.info_message = None,
        }

        state
    }
}

/// Loads the signed-in user's media into [`MediaState`]. Fire and forget: the
/// view re-renders from the store once the request settles.
pub fn fetch_user_media(
    auth: AuthDetails,
    media_dispatch: Dispatch<MediaState>,
    ui_dispatch: Dispatch<UIState>,
) {
    media_dispatch.apply(MediaStateMsg::FetchStarted);

    wasm_bindgen_futures::spawn_local(async move {
        match media_reqs::call_get_user_media(&auth.server_name, &auth.api_key).await {
            Ok(media) => {
                log::info!("Fetched {} media items", media.len());
                media_dispatch.apply(MediaStateMsg::FetchSucceeded(media));
            }
            Err(e) => {
                log::error!("Error fetching media: {:?}", e);
                media_dispatch.apply(MediaStateMsg::FetchFailed);
                ui_dispatch.apply(UIStateMsg::SetError(format!(
                    "Unable to load your media: {}",
                    format_error_message(&e.to_string())
                )));
            }
        }
    });
}

pub async fn delete_media(
    auth: AuthDetails,
    media_id: String,
    media_dispatch: Dispatch<MediaState>,
    ui_dispatch: Dispatch<UIState>,
) -> Result<(), anyhow::Error> {
    match media_reqs::call_delete_media(&auth.server_name, &auth.api_key, &media_id).await {
        Ok(()) => {
            media_dispatch.apply(MediaStateMsg::Removed(media_id));
            ui_dispatch.apply(UIStateMsg::SetInfo("Media deleted".to_string()));
            Ok(())
        }
        Err(e) => {
            log::error!("Error deleting media {}: {:?}", media_id, e);
            ui_dispatch.apply(UIStateMsg::SetError(format!(
                "Could not delete media: {}",
                format_error_message(&e.to_string())
            )));
            Err(e)
        }
    }
}
