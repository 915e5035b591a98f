use crate::components::context::{AppState, MediaState};
use crate::components::gen_components::{empty_message, LoadingSpinner};
use crate::components::gen_funcs::format_error_message;
use crate::components::routes::Route;
use crate::requests::media_reqs::{self, MediaItem, MediaType};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

/// What the detail page shows. "Not found" is only reported once a lookup
/// has actually come back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Failed(String),
    Ready(MediaItem),
    NotFound,
}

pub fn detail_view(
    cached: Option<MediaItem>,
    fetched: Option<MediaItem>,
    error: Option<String>,
    lookup_settled: bool,
) -> DetailView {
    if let Some(item) = cached.or(fetched) {
        return DetailView::Ready(item);
    }
    if let Some(error) = error {
        return DetailView::Failed(error);
    }
    if lookup_settled {
        DetailView::NotFound
    } else {
        DetailView::Loading
    }
}

#[function_component(MediaDetail)]
pub fn media_detail(props: &Props) -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let (media_state, _media_dispatch) = use_store::<MediaState>();
    let navigator = use_navigator();
    let fetched = use_state(|| None::<MediaItem>);
    let settled = use_state(|| false);
    let error = use_state(|| None::<String>);

    let cached = media_state.find(&props.id).cloned();

    // Only hit the API when the profile store doesn't already hold the item
    {
        let fetched = fetched.clone();
        let settled = settled.clone();
        let error = error.clone();
        let auth_details = state.auth_details.clone();
        let have_cached = cached.is_some();

        use_effect_with(
            (props.id.clone(), auth_details.is_some(), have_cached),
            move |(media_id, _, have_cached)| {
                if let (false, Some(auth_details)) = (*have_cached, auth_details) {
                    let media_id = media_id.clone();
                    settled.set(false);
                    wasm_bindgen_futures::spawn_local(async move {
                        match media_reqs::call_get_media(
                            &auth_details.server_name,
                            &auth_details.api_key,
                            &media_id,
                        )
                        .await
                        {
                            Ok(item) => {
                                fetched.set(item);
                                error.set(None);
                            }
                            Err(e) => {
                                log::error!("Error fetching media {}: {:?}", media_id, e);
                                error.set(Some(format_error_message(&e.to_string())));
                            }
                        }
                        settled.set(true);
                    });
                }
                || ()
            },
        );
    }

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Profile);
        }
    });

    let view = detail_view(cached, (*fetched).clone(), (*error).clone(), *settled);
    let content = match view {
        DetailView::Loading => html! { <LoadingSpinner /> },
        DetailView::Failed(error_msg) => html! { <div class="error-message">{ error_msg }</div> },
        DetailView::Ready(media) => {
            let player = match media.media_type {
                MediaType::Video => html! {
                    <video class="media-detail-player" src={media.url.clone()} controls=true />
                },
                MediaType::Image => html! {
                    <img class="media-detail-image" src={media.url.clone()} alt={media.title.clone()} />
                },
            };
            html! {
                <div class="flex flex-col gap-4">
                    { player }
                    <h1 class="text-2xl font-bold item_container-text">{ &media.title }</h1>
                    <p class="item_container-text opacity-80">{ &media.caption }</p>
                    <div class="flex flex-wrap gap-1">
                        { for media.tags.iter().map(|tag| html! {
                            <span class="media-tag-chip">{ tag }</span>
                        }) }
                    </div>
                </div>
            }
        }
        DetailView::NotFound => empty_message(
            "Media Not Found",
            "This item may have been deleted. Head back to your profile to see what's left.",
        ),
    };

    html! {
        <div class="main-container">
            <div class="item-container mx-auto max-w-4xl p-8 my-8 rounded-2xl border">
                <button class="settings-button mb-6 flex items-center gap-2" onclick={on_back}>
                    <i class="ph ph-arrow-left"></i>
                    {"Back to profile"}
                </button>
                { content }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            media_type: MediaType::Image,
            url: String::new(),
            title: id.to_string(),
            caption: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn waits_before_any_lookup_completes() {
        assert_eq!(detail_view(None, None, None, false), DetailView::Loading);
    }

    #[test]
    fn not_found_only_after_lookup_settles() {
        assert_eq!(detail_view(None, None, None, true), DetailView::NotFound);
    }

    #[test]
    fn store_copy_wins_without_a_lookup() {
        assert_eq!(
            detail_view(Some(item("m1")), None, None, false),
            DetailView::Ready(item("m1"))
        );
        assert_eq!(
            detail_view(None, Some(item("m2")), None, true),
            DetailView::Ready(item("m2"))
        );
    }

    #[test]
    fn lookup_error_is_shown() {
        assert_eq!(
            detail_view(None, None, Some("Failed to get media item: Forbidden".to_string()), true),
            DetailView::Failed("Failed to get media item: Forbidden".to_string())
        );
    }
}
