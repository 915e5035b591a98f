use crate::components::context::UIState;
use crate::components::media_store::UIStateMsg;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center mt-8">
            <div class="loading-animation">
                <div class="frame1"></div>
                <div class="frame2"></div>
                <div class="frame3"></div>
                <div class="frame4"></div>
                <div class="frame5"></div>
                <div class="frame6"></div>
            </div>
        </div>
    }
}

/// Error and info snackbars backed by [`UIState`]. Any click on the page
/// dismisses them.
#[function_component(MessageSnackbars)]
pub fn message_snackbars() -> Html {
    let (ui_state, ui_dispatch) = use_store::<UIState>();

    {
        let ui_dispatch = ui_dispatch.clone();
        use_effect_with((), move |_| {
            let document = window().and_then(|w| w.document());
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                ui_dispatch.apply(UIStateMsg::ClearErrorMessage);
                ui_dispatch.apply(UIStateMsg::ClearInfoMessage);
            }) as Box<dyn Fn(_)>);

            if let Some(document) = &document {
                if let Err(e) = document
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                {
                    log::error!("Failed to attach snackbar listener: {:?}", e);
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    html! {
        <>
            if let Some(error) = &ui_state.error_message {
                <div class="error-snackbar">{ error }</div>
            }
            if let Some(info) = &ui_state.info_message {
                <div class="info-snackbar">{ info }</div>
            }
        </>
    }
}

pub fn empty_message(header: &str, paragraph: &str) -> Html {
    html! {
        <div class="empty-episodes-container">
            <h1 class="page-subtitles">{ header }</h1>
            <p class="page-paragraphs">{ paragraph }</p>
        </div>
    }
}
