use {
    super::post::Redirect,
    crate::{api_client::ApiClient, confirmation::ConfirmationView, utils::html_page},
    actix_web::{web, HttpRequest, HttpResponse},
};

/// Render the confirmation page for the token in the path
pub async fn confirmation_page(
    request: HttpRequest,
    api_client: web::Data<ApiClient>,
) -> HttpResponse {
    let view = ConfirmationView::new(&request, api_client.into_inner(), Redirect::default());
    html_page(view.render())
}
