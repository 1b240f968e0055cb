mod get;
mod post;

pub use {get::confirmation_page, post::confirm};

use {crate::confirmation::TokenSource, actix_web::HttpRequest};

// `/confirm/{token}` matches with the token, `/confirm` without it.
// The router keeps `%2F`, `%2B` and `%25` encoded in path segments, decode what is left.
impl TokenSource for HttpRequest {
    fn current_token(&self) -> Option<String> {
        self.match_info().get("token").map(|raw| match urlencoding::decode(raw) {
            Ok(token) => token.into_owned(),
            Err(_) => raw.to_owned(),
        })
    }
}
