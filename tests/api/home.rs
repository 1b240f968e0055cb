use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_is_served_after_confirmation() {
    let test_app = spawn_app().await;

    let response = test_app.get_home().await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("<h1>Home</h1>"));
}
