mod auth;
mod cookie;

pub use auth::authenticate;
pub use cookie::get_session_id_from_headers;

pub(crate) use cookie::{
    append_set_cookie, build_blank_session_cookie, build_session_cookie, build_state_cookie,
    get_cookie_from_headers,
};
