//! Embedded frontend bundle.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`, which is compiled
//! into the binary. Unknown paths get `index.html` so the single-page app can
//! load from any URL.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Whether a compiled frontend (not just the placeholder page) is embedded.
pub fn has_bundle() -> bool {
    STATIC_DIR
        .files()
        .any(|file| file.path().extension().is_some_and(|ext| ext == "wasm"))
}

/// Serves the embedded file at the request path. Anything not in the bundle
/// gets `index.html`; a 404 is only returned when even that is missing.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let requested = match req.path().trim_start_matches('/') {
        "" => "index.html",
        path => path,
    };
    let Some((path, file)) = STATIC_DIR
        .get_file(requested)
        .map(|file| (requested, file))
        .or_else(|| STATIC_DIR.get_file("index.html").map(|file| ("index.html", file)))
    else {
        return HttpResponse::NotFound().body("Not Found");
    };

    let mime = from_path(path).first_or_octet_stream();
    HttpResponse::Ok()
        .content_type(mime.as_ref())
        .body(file.contents())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn unknown_routes_fall_back_to_index() {
        let app =
            test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        for uri in ["/", "/terpenes/12"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert!(resp.status().is_success());
            let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"));
        }
    }
}
