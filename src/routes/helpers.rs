pub fn prepare_html_template(entries: &[(&str, &str)], template_name: &str) -> String {
    let mut ctx = tera::Context::new();
    for (key, value) in entries.iter().copied() {
        ctx.insert(key, value);
    }
    let tera = tera::Tera::new("views/**/*").expect("Failed to initialize Tera templates");
    tera.render(template_name, &ctx)
        .expect("Failed rendering page template")
}
