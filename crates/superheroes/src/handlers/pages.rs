use axum::response::Html;

/// Landing page (GET /).
pub async fn index() -> Html<&'static str> {
    Html("<h1>Superheroes API</h1>")
}
