use yew_router::Routable;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Profile,
    #[at("/media/:id")]
    MediaDetail { id: String },
    #[at("/upload")]
    Upload,
    #[not_found]
    #[at("/404")]
    NotFound,
}
