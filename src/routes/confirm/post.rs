use {
    crate::{
        api_client::ApiClient,
        confirmation::{ConfirmationView, Navigator},
        utils::{html_page, see_other},
    },
    actix_web::{web, HttpRequest, HttpResponse},
    std::sync::{Mutex, PoisonError},
};

/// Navigation for a server-rendered page: remember where to go and answer with a redirect.
#[derive(Default)]
pub struct Redirect(Mutex<Option<String>>);

impl Redirect {
    pub fn location(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for Redirect {
    fn navigate(&self, path: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(path.to_owned());
    }
}

/// Handle a press of the confirmation button.
///
/// The user only leaves the page when the backend accepted the token.
#[tracing::instrument(name = "Submit an account confirmation", skip_all)]
pub async fn confirm(request: HttpRequest, api_client: web::Data<ApiClient>) -> HttpResponse {
    let view = ConfirmationView::new(&request, api_client.into_inner(), Redirect::default());

    if let Err(e) = view.confirm().await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Could not reach the backend to confirm token"
        );
    }

    match view.navigator().location() {
        Some(location) => see_other(&location),
        None => html_page(view.render()),
    }
}
