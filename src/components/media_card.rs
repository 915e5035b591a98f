use crate::components::routes::Route;
use crate::requests::media_reqs::{MediaItem, MediaType};
use yew::prelude::*;
use yew_router::prelude::*;

/// The three click targets on a card. `Edit` and `Delete` live on top of the
/// card body, so their handlers stop propagation before reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Open,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardEffect {
    Navigate(Route),
    RequestDelete(String),
}

pub fn card_effect(action: CardAction, media_id: &str) -> CardEffect {
    match action {
        CardAction::Open | CardAction::Edit => CardEffect::Navigate(Route::MediaDetail {
            id: media_id.to_string(),
        }),
        CardAction::Delete => CardEffect::RequestDelete(media_id.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaCardProps {
    pub media: MediaItem,
    pub on_delete: Callback<String>,
    #[prop_or_default]
    pub deleting: bool,
}

#[function_component(MediaCard)]
pub fn media_card(props: &MediaCardProps) -> Html {
    let navigator = use_navigator();

    let dispatch_effect = {
        let navigator = navigator.clone();
        let on_delete = props.on_delete.clone();
        let media_id = props.media.id.clone();
        move |action: CardAction| match card_effect(action, &media_id) {
            CardEffect::Navigate(route) => {
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
            }
            CardEffect::RequestDelete(id) => on_delete.emit(id),
        }
    };

    let on_open = {
        let dispatch_effect = dispatch_effect.clone();
        Callback::from(move |_: MouseEvent| dispatch_effect(CardAction::Open))
    };
    let on_edit = {
        let dispatch_effect = dispatch_effect.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatch_effect(CardAction::Edit);
        })
    };
    let on_delete = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        dispatch_effect(CardAction::Delete);
    });

    let media = &props.media;
    let thumbnail = match media.media_type {
        MediaType::Video => html! {
            <video class="media-card-thumb" src={media.url.clone()} preload="metadata" />
        },
        MediaType::Image => html! {
            <img class="media-card-thumb" src={media.url.clone()} alt={media.title.clone()} loading="lazy" />
        },
    };

    html! {
        <div class={classes!("media-card", "item-container", props.deleting.then_some("opacity-50"))}>
            <div class="media-card-action-area cursor-pointer" onclick={on_open}>
                <div class="relative">
                    { thumbnail }
                    <div class="media-actions">
                        <button class="media-action-button" title="Edit" onclick={on_edit}>
                            <i class="ph ph-pencil-simple text-xl"></i>
                        </button>
                        <button
                            class="media-action-button"
                            title="Delete"
                            disabled={props.deleting}
                            onclick={on_delete}
                        >
                            <i class="ph ph-trash text-xl"></i>
                        </button>
                    </div>
                </div>
            </div>
            <div class="media-card-content">
                <h2 class="item_container-text font-semibold truncate">{ &media.title }</h2>
                <p class="item_container-text text-sm opacity-80 line-clamp-2 mb-2">{ &media.caption }</p>
                <div class="flex flex-wrap gap-1">
                    { for media.tags.iter().map(|tag| html! {
                        <span class="media-tag-chip">{ tag }</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
