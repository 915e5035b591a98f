pub(crate) mod context;
pub(crate) mod delete_flow;
pub(crate) mod gen_components;
pub mod gen_funcs;
pub(crate) mod media_card;
pub(crate) mod media_detail;
pub(crate) mod media_store;
pub(crate) mod navigation;
pub(crate) mod profile;
pub(crate) mod routes;
pub(crate) mod upload;
