// Custom Mods
mod components;
mod requests;

#[cfg(test)]
mod tests;

use components::gen_components::MessageSnackbars;
use components::media_detail::MediaDetail;
use components::navigation::NavigationHandler;
use components::profile::Profile;
use components::routes::Route;
use components::upload::Upload;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let on_home_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Profile);
        }
    });
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen p-8">
            <div class="flex flex-col items-center text-center max-w-md space-y-6">
                <div class="flex items-center gap-4 mb-4">
                    <i class="ph ph-warning-circle text-8xl item_container-text opacity-80" />
                    <span class="text-8xl font-bold item_container-text opacity-80">{"404"}</span>
                </div>

                <h1 class="text-3xl font-bold item_container-text">
                    {"Page Not Found"}
                </h1>

                <p class="text-lg item_container-text opacity-80">
                    {"Nothing to see here. The page may have moved or never existed."}
                </p>

                <button
                    onclick={on_home_click}
                    class="flex items-center gap-2 px-6 py-3 mt-4 rounded-lg transition-all
                        item_container-text border-2 border-current hover:opacity-80
                        active:scale-95 text-lg font-medium"
                >
                    <i class="ph ph-user-circle text-xl" />
                    {"Back to your profile"}
                </button>
            </div>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Profile => html! { <Profile /> },
        Route::MediaDetail { id } => html! { <MediaDetail id={id.clone()} /> },
        Route::Upload => html! { <Upload /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <BrowserRouter>
            <NavigationHandler>
                <Switch<Route> render={switch} />
                <MessageSnackbars />
            </NavigationHandler>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<Main>::new().render();
}
