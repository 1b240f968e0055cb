use {crate::utils::html_page, actix_web::HttpResponse};

pub async fn home() -> HttpResponse {
    html_page(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Home</title>
</head>
<body>
    <h1>Home</h1>
</body>
</html>"#
            .to_string(),
    )
}
