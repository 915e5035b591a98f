use crate::components::context::{AppState, UIState};
use crate::components::gen_funcs::{format_error_message, parse_tags};
use crate::components::media_store::UIStateMsg;
use crate::components::routes::Route;
use crate::requests::media_reqs::{self, MediaType, NewMedia};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

pub fn validate_upload(url: &str, title: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("A media URL is required".to_string());
    }
    if title.trim().is_empty() {
        return Err("A title is required".to_string());
    }
    Ok(())
}

fn parse_media_type(value: &str) -> MediaType {
    match value {
        "video" => MediaType::Video,
        _ => MediaType::Image,
    }
}

#[function_component(Upload)]
pub fn upload() -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let (_ui_state, ui_dispatch) = use_store::<UIState>();
    let navigator = use_navigator();

    let media_type = use_state(|| MediaType::Image);
    let url = use_state(String::new);
    let title = use_state(String::new);
    let caption = use_state(String::new);
    let tags = use_state(String::new);
    let submitting = use_state(|| false);
    let validation_error = use_state(|| None::<String>);

    let on_type_change = {
        let media_type = media_type.clone();
        Callback::from(move |e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            media_type.set(parse_media_type(&select.value()));
        })
    };
    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            url.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            title.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_caption_input = {
        let caption = caption.clone();
        Callback::from(move |e: InputEvent| {
            caption.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_tags_input = {
        let tags = tags.clone();
        Callback::from(move |e: InputEvent| {
            tags.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let auth_details = state.auth_details.clone();
        let media_type = media_type.clone();
        let url = url.clone();
        let title = title.clone();
        let caption = caption.clone();
        let tags = tags.clone();
        let submitting = submitting.clone();
        let validation_error = validation_error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = validate_upload(&url, &title) {
                validation_error.set(Some(message));
                return;
            }
            validation_error.set(None);

            let Some(auth_details) = auth_details.clone() else {
                ui_dispatch.apply(UIStateMsg::SetError(
                    "You need to be signed in to upload".to_string(),
                ));
                return;
            };
            let new_media = NewMedia {
                media_type: *media_type,
                url: url.trim().to_string(),
                title: title.trim().to_string(),
                caption: caption.trim().to_string(),
                tags: parse_tags(&tags),
            };
            let submitting = submitting.clone();
            let ui_dispatch = ui_dispatch.clone();
            let navigator = navigator.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match media_reqs::call_upload_media(
                    &auth_details.server_name,
                    &auth_details.api_key,
                    &new_media,
                )
                .await
                {
                    Ok(created) => {
                        log::info!("Uploaded media {}", created.id);
                        ui_dispatch.apply(UIStateMsg::SetInfo("Media uploaded".to_string()));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Profile);
                        }
                    }
                    Err(e) => {
                        log::error!("Error uploading media: {:?}", e);
                        ui_dispatch.apply(UIStateMsg::SetError(format!(
                            "Upload failed: {}",
                            format_error_message(&e.to_string())
                        )));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="main-container">
            <div class="item-container mx-auto max-w-xl p-8 my-8 rounded-2xl border">
                <h1 class="text-2xl font-bold item_container-text mb-6">{"Upload Media"}</h1>
                <form class="flex flex-col gap-4" onsubmit={on_submit}>
                    <label class="form-label" for="media-type">{"Type"}</label>
                    <select id="media-type" class="search-bar-input" onchange={on_type_change}>
                        <option value="image" selected={*media_type == MediaType::Image}>{"Image"}</option>
                        <option value="video" selected={*media_type == MediaType::Video}>{"Video"}</option>
                    </select>

                    <label class="form-label" for="media-url">{"URL"}</label>
                    <input id="media-url" type="url" class="search-bar-input"
                        value={(*url).clone()} oninput={on_url_input} />

                    <label class="form-label" for="media-title">{"Title"}</label>
                    <input id="media-title" type="text" class="search-bar-input"
                        value={(*title).clone()} oninput={on_title_input} />

                    <label class="form-label" for="media-caption">{"Caption"}</label>
                    <textarea id="media-caption" class="search-bar-input" rows="3"
                        value={(*caption).clone()} oninput={on_caption_input} />

                    <label class="form-label" for="media-tags">{"Tags (comma separated)"}</label>
                    <input id="media-tags" type="text" class="search-bar-input"
                        value={(*tags).clone()} oninput={on_tags_input} />

                    if let Some(message) = &*validation_error {
                        <p class="error-message">{ message }</p>
                    }

                    <button type="submit" class="settings-button font-semibold" disabled={*submitting}>
                        { if *submitting { "Uploading..." } else { "Upload" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
