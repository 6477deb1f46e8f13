use crate::handlers::{admin, auth, public};

use actix_web::web;

/// Register every page route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public::home)
        .service(public::blogs)
        .service(public::blog_detail)
        .service(auth::login_form)
        .service(auth::login_submit)
        .service(auth::logout)
        .service(admin::admin_index)
        .service(admin::dashboard)
        .service(admin::stats)
        .service(admin::blogs)
        .service(admin::blog)
        .service(admin::update_blog)
        .service(admin::delete_blog)
        .service(admin::create_form)
        .service(admin::create_submit);
}
