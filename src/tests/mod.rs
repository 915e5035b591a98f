// src/tests/mod.rs
use crate::components::context::{AppState, MediaState, UIState};
use crate::components::media_card::{card_effect, CardAction, CardEffect};
use crate::components::media_store::MediaStateMsg;
use crate::components::profile::{profile_body, MediaTab, ProfileBody};
use crate::components::routes::Route;
use crate::requests::media_reqs::{MediaItem, MediaType};
use std::rc::Rc;
use yew_router::Routable;
use yewdux::prelude::Reducer;

fn media(id: &str, media_type: MediaType) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        media_type,
        url: format!("https://cdn.example.com/{}", id),
        title: format!("Title {}", id),
        caption: "caption".to_string(),
        tags: vec!["tag".to_string()],
    }
}

#[test]
fn test_basic_state() {
    let state = AppState::default();
    assert!(state.user_details.is_none());
    assert!(state.auth_details.is_none());

    let media_state = MediaState::default();
    assert!(!media_state.loading);
    assert!(media_state.user_media.is_empty());

    let ui_state = UIState::default();
    assert!(ui_state.error_message.is_none());
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Profile.to_path(), "/");
    assert_eq!(Route::Upload.to_path(), "/upload");
    assert_eq!(
        Route::MediaDetail {
            id: "abc".to_string()
        }
        .to_path(),
        "/media/abc"
    );
}

#[test]
fn test_route_recognize() {
    assert_eq!(
        Route::recognize("/media/xyz"),
        Some(Route::MediaDetail {
            id: "xyz".to_string()
        })
    );
    assert_eq!(Route::recognize("/upload"), Some(Route::Upload));
}

// Store -> view: after a delete lands, the rendered set shrinks in place
#[test]
fn test_delete_updates_rendered_set() {
    let state = Rc::new(MediaState::default());
    let state = MediaStateMsg::FetchStarted.apply(state);
    assert_eq!(
        profile_body(state.loading, &state.user_media, MediaTab::Images),
        ProfileBody::Loading
    );

    let state = MediaStateMsg::FetchSucceeded(vec![
        media("a", MediaType::Image),
        media("b", MediaType::Image),
        media("c", MediaType::Video),
    ])
    .apply(state);

    let effect = card_effect(CardAction::Delete, "a");
    let CardEffect::RequestDelete(id) = effect else {
        panic!("delete control must not navigate");
    };
    let state = MediaStateMsg::Removed(id).apply(state);

    match profile_body(state.loading, &state.user_media, MediaTab::Images) {
        ProfileBody::Grid(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "b");
        }
        other => panic!("expected grid, got {:?}", other),
    }

    let state = MediaStateMsg::Removed("b".to_string()).apply(state);
    assert_eq!(
        profile_body(state.loading, &state.user_media, MediaTab::Images),
        ProfileBody::Empty(MediaTab::Images)
    );
}
