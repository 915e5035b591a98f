pub mod login_requests;
pub mod media_reqs;
