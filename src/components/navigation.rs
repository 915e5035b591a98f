// navigation.rs
use crate::components::context::{AppState, UIState};
use crate::components::gen_funcs::format_error_message;
use crate::components::media_store::UIStateMsg;
use crate::requests::login_requests::{
    call_get_current_user, clear_auth_details, load_auth_details,
};
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationHandlerProps {
    pub children: Children,
}

/// Restores the persisted session and loads the signed-in user before any
/// routed page needs it.
#[function_component(NavigationHandler)]
pub fn navigation_handler(props: &NavigationHandlerProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let (_ui_state, ui_dispatch) = use_store::<UIState>();

    use_effect_with((), move |_| {
        match load_auth_details() {
            Some(auth_details) => {
                dispatch.reduce_mut(|state| {
                    state.auth_details = Some(auth_details.clone());
                });

                wasm_bindgen_futures::spawn_local(async move {
                    match call_get_current_user(&auth_details.server_name, &auth_details.api_key)
                        .await
                    {
                        Ok(user) => {
                            log::info!("Session restored for {}", user.name);
                            dispatch.reduce_mut(move |state| {
                                state.user_details = Some(user);
                            });
                        }
                        Err(e) => {
                            log::error!("Failed to restore session: {:?}", e);
                            clear_auth_details();
                            dispatch.reduce_mut(|state| {
                                state.auth_details = None;
                            });
                            ui_dispatch.apply(UIStateMsg::SetError(format!(
                                "Your session could not be restored: {}",
                                format_error_message(&e.to_string())
                            )));
                        }
                    }
                });
            }
            None => {
                log::warn!("No stored session found");
                ui_dispatch.apply(UIStateMsg::SetError(
                    "You are not signed in".to_string(),
                ));
            }
        }
        || ()
    });

    html! { <>{ for props.children.iter() }</> }
}
