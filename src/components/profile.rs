use crate::components::context::{AppState, MediaState, UIState};
use crate::components::delete_flow::{confirm_and_delete, BrowserConfirm, DeleteFlow};
use crate::components::gen_components::LoadingSpinner;
use crate::components::gen_funcs::{avatar_initial, format_join_date};
use crate::components::media_card::MediaCard;
use crate::components::media_store::{delete_media, fetch_user_media};
use crate::components::routes::Route;
use crate::requests::login_requests::{AuthDetails, UserDetails};
use crate::requests::media_reqs::{MediaItem, MediaType};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTab {
    #[default]
    Images,
    Videos,
}

impl MediaTab {
    pub const ALL: [MediaTab; 2] = [MediaTab::Images, MediaTab::Videos];

    pub fn media_type(self) -> MediaType {
        match self {
            MediaTab::Images => MediaType::Image,
            MediaTab::Videos => MediaType::Video,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaTab::Images => "Images",
            MediaTab::Videos => "Videos",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            MediaTab::Images => "images",
            MediaTab::Videos => "videos",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            MediaTab::Images => "Image",
            MediaTab::Videos => "Video",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            MediaTab::Images => "ph ph-images",
            MediaTab::Videos => "ph ph-video-camera",
        }
    }
}

/// Items whose type matches `tab`, in store order.
pub fn filter_media(items: &[MediaItem], tab: MediaTab) -> Vec<MediaItem> {
    items
        .iter()
        .filter(|m| m.media_type == tab.media_type())
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileBody {
    Loading,
    Grid(Vec<MediaItem>),
    Empty(MediaTab),
}

pub fn profile_body(loading: bool, items: &[MediaItem], tab: MediaTab) -> ProfileBody {
    if loading {
        return ProfileBody::Loading;
    }
    let filtered = filter_media(items, tab);
    if filtered.is_empty() {
        ProfileBody::Empty(tab)
    } else {
        ProfileBody::Grid(filtered)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    AwaitingUser,
    Ready(UserDetails, ProfileBody),
}

/// Nothing but the spinner renders until the user is known, whatever the
/// media store holds.
pub fn profile_view(
    user: Option<&UserDetails>,
    loading: bool,
    items: &[MediaItem],
    tab: MediaTab,
) -> ProfileView {
    match user {
        Some(user) => ProfileView::Ready(user.clone(), profile_body(loading, items, tab)),
        None => ProfileView::AwaitingUser,
    }
}

/// Session to fetch with, if a user is signed in.
pub fn should_fetch(user_id: Option<&str>, auth: Option<AuthDetails>) -> Option<AuthDetails> {
    user_id.and(auth)
}

#[derive(Properties, PartialEq)]
struct ProfileHeaderProps {
    user: UserDetails,
}

#[function_component(ProfileHeader)]
fn profile_header(props: &ProfileHeaderProps) -> Html {
    let user = &props.user;
    let avatar = match user.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(src) => html! {
            <img class="profile-avatar" src={src.to_string()} alt={user.name.clone()} />
        },
        None => html! {
            <div class="profile-avatar profile-avatar-fallback">{ avatar_initial(&user.name) }</div>
        },
    };

    html! {
        <div class="flex items-center gap-6 mb-8">
            { avatar }
            <div>
                <h1 class="text-3xl font-bold item_container-text mb-1">{ &user.name }</h1>
                <div class="flex gap-6 item_container-text opacity-80 text-sm">
                    <span class="flex items-center gap-1">
                        <i class="ph ph-calendar-blank"></i>
                        { format!("Joined {}", format_join_date(&user.created_at)) }
                    </span>
                    if let Some(location) = user.location.as_ref().filter(|l| !l.is_empty()) {
                        <span class="flex items-center gap-1">
                            <i class="ph ph-map-pin"></i>
                            { location }
                        </span>
                    }
                </div>
                if let Some(bio) = user.bio.as_ref().filter(|b| !b.is_empty()) {
                    <p class="mt-4 item_container-text opacity-80 max-w-xl">{ bio }</p>
                }
            </div>
        </div>
    }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let (media_state, media_dispatch) = use_store::<MediaState>();
    let (_ui_state, ui_dispatch) = use_store::<UIState>();
    let navigator = use_navigator();
    let active_tab = use_state(MediaTab::default);
    let deleting = use_state(|| None::<String>);

    // Fetch media once the signed-in user is known
    {
        let user_id = state.user_details.as_ref().map(|ud| ud.id.clone());
        let auth_details = state.auth_details.clone();
        let media_dispatch = media_dispatch.clone();
        let ui_dispatch = ui_dispatch.clone();

        use_effect_with(user_id, move |user_id| {
            if let Some(auth_details) = should_fetch(user_id.as_deref(), auth_details) {
                fetch_user_media(auth_details, media_dispatch, ui_dispatch);
            }
            || ()
        });
    }

    let on_delete = {
        let auth_details = state.auth_details.clone();
        let deleting = deleting.clone();
        Callback::from(move |media_id: String| {
            let Some(auth_details) = auth_details.clone() else {
                log::warn!("Delete requested without an active session");
                return;
            };
            let media_dispatch = media_dispatch.clone();
            let ui_dispatch = ui_dispatch.clone();
            let deleting = deleting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let in_flight = deleting.clone();
                let flow = confirm_and_delete(&BrowserConfirm, media_id, move |id| {
                    in_flight.set(Some(id.clone()));
                    delete_media(auth_details, id, media_dispatch, ui_dispatch)
                })
                .await;
                deleting.set(None);

                if let DeleteFlow::Resolved {
                    media_id,
                    outcome: Ok(()),
                } = flow
                {
                    log::info!("Deleted media {}", media_id);
                }
            });
        })
    };

    let tab = *active_tab;
    let (user, body) = match profile_view(
        state.user_details.as_ref(),
        media_state.loading,
        &media_state.user_media,
        tab,
    ) {
        ProfileView::AwaitingUser => {
            return html! {
                <div class="main-container">
                    <LoadingSpinner />
                </div>
            };
        }
        ProfileView::Ready(user, body) => (user, body),
    };

    let tabs = MediaTab::ALL
        .iter()
        .map(|&t| {
            let active_tab = active_tab.clone();
            let onclick = Callback::from(move |_: MouseEvent| active_tab.set(t));
            html! {
                <button
                    class={classes!("profile-tab", (t == tab).then_some("profile-tab-active"))}
                    {onclick}
                >
                    <i class={t.icon()}></i>
                    <span>{ t.label() }</span>
                </button>
            }
        })
        .collect::<Html>();

    let body = match body {
        ProfileBody::Loading => html! { <LoadingSpinner /> },
        ProfileBody::Grid(items) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                { for items.into_iter().map(|media| {
                    let is_deleting = deleting.as_deref() == Some(media.id.as_str());
                    let key = media.id.clone();
                    html! {
                        <MediaCard
                            key={key}
                            media={media}
                            on_delete={on_delete.clone()}
                            deleting={is_deleting}
                        />
                    }
                }) }
            </div>
        },
        ProfileBody::Empty(tab) => {
            let on_upload = {
                let navigator = navigator.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Upload);
                    }
                })
            };
            html! {
                <div class="text-center py-8 item_container-text opacity-80">
                    <h2 class="text-xl font-semibold mb-2">{ format!("No {} found", tab.plural()) }</h2>
                    <button class="settings-button mt-4 px-8 font-semibold" onclick={on_upload}>
                        { format!("Upload {}", tab.singular()) }
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="main-container">
            <div class="item-container mx-auto max-w-5xl p-8 my-8 rounded-2xl border">
                <ProfileHeader user={user} />
                <hr class="mb-8" />
                <div class="flex gap-2 mb-8">{ tabs }</div>
                { body }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, media_type: MediaType) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            media_type,
            url: String::new(),
            title: id.to_string(),
            caption: String::new(),
            tags: vec![],
        }
    }

    fn sample() -> Vec<MediaItem> {
        vec![
            item("i1", MediaType::Image),
            item("v1", MediaType::Video),
            item("i2", MediaType::Image),
            item("v2", MediaType::Video),
            item("i3", MediaType::Image),
        ]
    }

    fn ids(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn default_tab_is_images() {
        assert_eq!(MediaTab::default(), MediaTab::Images);
    }

    #[test]
    fn filter_keeps_store_order_per_tab() {
        let media = sample();
        assert_eq!(ids(&filter_media(&media, MediaTab::Images)), vec!["i1", "i2", "i3"]);
        assert_eq!(ids(&filter_media(&media, MediaTab::Videos)), vec!["v1", "v2"]);
    }

    #[test]
    fn loading_hides_grid_even_with_matches() {
        assert_eq!(profile_body(true, &sample(), MediaTab::Images), ProfileBody::Loading);
        assert_eq!(profile_body(true, &[], MediaTab::Videos), ProfileBody::Loading);
    }

    #[test]
    fn empty_state_follows_active_tab() {
        let only_images = vec![item("i1", MediaType::Image)];
        match profile_body(false, &only_images, MediaTab::Videos) {
            ProfileBody::Empty(tab) => {
                assert_eq!(format!("No {} found", tab.plural()), "No videos found");
                assert_eq!(format!("Upload {}", tab.singular()), "Upload Video");
            }
            other => panic!("expected empty state, got {:?}", other),
        }
        match profile_body(false, &[], MediaTab::Images) {
            ProfileBody::Empty(tab) => {
                assert_eq!(format!("No {} found", tab.plural()), "No images found");
                assert_eq!(format!("Upload {}", tab.singular()), "Upload Image");
            }
            other => panic!("expected empty state, got {:?}", other),
        }
    }

    #[test]
    fn grid_holds_only_matching_items() {
        match profile_body(false, &sample(), MediaTab::Videos) {
            ProfileBody::Grid(items) => assert_eq!(ids(&items), vec!["v1", "v2"]),
            other => panic!("expected grid, got {:?}", other),
        }
    }

    fn user() -> UserDetails {
        UserDetails {
            id: "u1".to_string(),
            name: "ada".to_string(),
            avatar: None,
            bio: None,
            location: None,
            created_at: "2024-03-05T10:00:00Z".to_string(),
        }
    }

    fn auth() -> AuthDetails {
        AuthDetails {
            server_name: "https://api.example.com".to_string(),
            api_key: Some("key".to_string()),
        }
    }

    #[test]
    fn no_user_renders_only_spinner() {
        assert_eq!(
            profile_view(None, true, &sample(), MediaTab::Images),
            ProfileView::AwaitingUser
        );
        assert_eq!(
            profile_view(None, false, &sample(), MediaTab::Videos),
            ProfileView::AwaitingUser
        );
        assert_eq!(
            profile_view(None, false, &[], MediaTab::Images),
            ProfileView::AwaitingUser
        );
    }

    #[test]
    fn known_user_renders_body() {
        let user = user();
        match profile_view(Some(&user), false, &sample(), MediaTab::Images) {
            ProfileView::Ready(shown, ProfileBody::Grid(items)) => {
                assert_eq!(shown, user);
                assert_eq!(ids(&items), vec!["i1", "i2", "i3"]);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn fetch_waits_for_user() {
        assert_eq!(should_fetch(None, Some(auth())), None);
        assert_eq!(should_fetch(Some("u1"), None), None);
        assert_eq!(should_fetch(Some("u1"), Some(auth())), Some(auth()));
    }
}
