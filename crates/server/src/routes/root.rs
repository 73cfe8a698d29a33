use axum::response::Html;

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
  <head>
    <meta charset="utf-8">
    <title>Tasku</title>
  </head>
  <body>
    <div class="container">
      <h1 class="title">Bienvenido a Tasku</h1>
      <p class="subtitle">proyecto en desarrollo</p>
      <div class="emoji">🔧</div>
    </div>
  </body>
</html>
"#;

/// Landing page shown while the project is under development
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page", content_type = "text/html", body = String)
    ),
    tag = "Tasku"
)]
pub async fn root() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_renders_welcome_text() {
        let Html(page) = root().await;
        assert!(page.contains("Bienvenido a Tasku"));
        assert!(page.contains("proyecto en desarrollo"));
        assert!(page.contains('🔧'));
    }
}
