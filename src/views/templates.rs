use handlebars::Handlebars;
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

const TEMPLATES: &[(&str, &str)] = &[
    // Layout + pages
    ("layouts/base", include_str!("../../templates/layouts/base.hbs")),
    ("pages/home", include_str!("../../templates/pages/home.hbs")),
    ("pages/cart", include_str!("../../templates/pages/cart.hbs")),
    ("pages/not_found", include_str!("../../templates/pages/not_found.hbs")),
    // Partial endpoints
    ("partials/product_list", include_str!("../../templates/partials/product_list.hbs")),
    ("partials/cart_items", include_str!("../../templates/partials/cart_items.hbs")),
    ("partials/cart_badge", include_str!("../../templates/partials/cart_badge.hbs")),
    ("partials/notice", include_str!("../../templates/partials/notice.hbs")),
];

pub fn build_handlebars() -> Result<Hbs, String> {
    let mut hb = Handlebars::new();
    for (name, source) in TEMPLATES {
        hb.register_template_string(name, *source)
            .map_err(|e| format!("template {name}: {e}"))?;
    }

    hb.register_partial("header", include_str!("../../templates/partials/header.hbs"))
        .map_err(|e| format!("register header partial: {e}"))?;

    Ok(Arc::new(hb))
}
