use crate::context::RequestContext;
use crate::error::FrontendError;
use crate::forms::LoginForm;
use crate::templates::{LoginTemplate, NavShell, render};

use client_core::navigation::LOGIN_PATH;
use client_core::pages::{LoginOutcome, LoginPage};

use actix_web::{HttpResponse, get, post, web};
use log::info;

#[get("/login")]
pub async fn login_form(ctx: RequestContext) -> Result<HttpResponse, FrontendError> {
    let response = render(&LoginTemplate {
        nav: NavShell::for_path(ctx.path()),
        email: String::new(),
        error: None,
    })?;
    Ok(ctx.finish(response))
}

#[post("/login")]
pub async fn login_submit(
    ctx: RequestContext,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, FrontendError> {
    match LoginPage::submit(&ctx.api, form.into_inner().into()).await {
        LoginOutcome::Success { redirect_to } => {
            info!("Admin signed in");
            Ok(ctx.redirect(redirect_to))
        }
        LoginOutcome::Failed { email, error } => {
            let response = render(&LoginTemplate {
                nav: NavShell::for_path(ctx.path()),
                email,
                error: Some(error),
            })?;
            Ok(ctx.finish(response))
        }
    }
}

#[post("/logout")]
pub async fn logout(ctx: RequestContext) -> HttpResponse {
    ctx.api.logout();
    ctx.redirect(LOGIN_PATH)
}
