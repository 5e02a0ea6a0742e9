use actix_web::{HttpResponse, http::header::ContentType};

use super::helpers::prepare_html_template;

pub async fn home() -> HttpResponse {
    render_page("home.html", "home")
}

pub async fn about() -> HttpResponse {
    render_page("about.html", "about")
}

pub async fn services() -> HttpResponse {
    render_page("services.html", "services")
}

pub async fn contact_page() -> HttpResponse {
    render_page("contact.html", "contact")
}

fn render_page(template_name: &str, active_page: &str) -> HttpResponse {
    let page_string = prepare_html_template(&[("active_page", active_page)], template_name);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page_string)
}
