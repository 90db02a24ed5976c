use axum::response::Html;

const STATUS_PAGE: &str = r#"<!doctype html>
<html>
    <head><title>Status Page</title></head>
    <body>
        <h1>Status</h1>
        <p>The server is working fine. Bye bye!</p>
    </body>
</html>"#;

/// Static liveness page.
pub async fn status() -> Html<&'static str> {
    Html(STATUS_PAGE)
}
