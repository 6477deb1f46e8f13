use crate::context::{RequestContext, see_other};
use crate::error::FrontendError;
use crate::forms::{AdminBlogQuery, AdminBlogsQuery, BlogForm};
use crate::guard::AdminSession;
use crate::templates::{
    AdminBlogTemplate, AdminBlogsTemplate, CreateTemplate, DashboardTemplate, NavShell,
    StatsTemplate, render, topic_choices,
};

use client_core::navigation::{ADMIN_BLOGS, ADMIN_HOME};
use client_core::pages::{
    AdminBlogPage, AdminBlogsPage, BlogEditor, DashboardPage, EditorOutcome, StatsPage,
};

use models::BlogId;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};

#[get("/admin")]
pub async fn admin_index(_session: AdminSession) -> HttpResponse {
    see_other(ADMIN_HOME)
}

#[get("/admin/dashboard")]
pub async fn dashboard(session: AdminSession) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let page = DashboardPage::load(&ctx.api).await;

    let response = render(&DashboardTemplate::new(nav(&ctx), &page))?;
    Ok(ctx.finish(response))
}

#[get("/admin/stats")]
pub async fn stats(session: AdminSession) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let page = StatsPage::load(&ctx.api).await;

    let response = render(&StatsTemplate {
        nav: nav(&ctx),
        page,
    })?;
    Ok(ctx.finish(response))
}

#[get("/admin/blogs")]
pub async fn blogs(
    session: AdminSession,
    query: web::Query<AdminBlogsQuery>,
) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let page = AdminBlogsPage::load(&ctx.api, query.q.as_deref()).await;

    let response = render(&AdminBlogsTemplate::new(nav(&ctx), page))?;
    Ok(ctx.finish(response))
}

#[get("/admin/blogs/{id}")]
pub async fn blog(
    session: AdminSession,
    id: web::Path<String>,
    query: web::Query<AdminBlogQuery>,
) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let id = BlogId::new(id.into_inner());
    let page = AdminBlogPage::load(&ctx.api, &id, query.editing()).await;

    let response = render(&AdminBlogTemplate::new(nav(&ctx), page))?;
    Ok(ctx.finish(response))
}

#[post("/admin/blogs/{id}")]
pub async fn update_blog(
    session: AdminSession,
    id: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let id = BlogId::new(id.into_inner());
    let form = BlogForm::read(payload).await?;

    match BlogEditor::update(&ctx.api, &id, form.to_builder()).await {
        EditorOutcome::Saved { redirect_to } => Ok(ctx.redirect(redirect_to)),
        EditorOutcome::Rejected { .. } if ctx.navigator().pending().is_some() => {
            Ok(ctx.finish(HttpResponse::Ok().finish()))
        }
        EditorOutcome::Rejected { error } => {
            let page = AdminBlogPage::load(&ctx.api, &id, true).await.with_error(error);
            let response = render(&AdminBlogTemplate::new(nav(&ctx), page))?;
            Ok(ctx.finish(response))
        }
    }
}

#[post("/admin/blogs/{id}/delete")]
pub async fn delete_blog(
    session: AdminSession,
    id: web::Path<String>,
) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let id = BlogId::new(id.into_inner());

    match AdminBlogsPage::delete(&ctx.api, &id).await {
        Ok(()) => Ok(ctx.redirect(ADMIN_BLOGS)),
        Err(error) => {
            let page = AdminBlogsPage::load(&ctx.api, None).await.with_error(error);
            let nav = NavShell::for_path(ADMIN_BLOGS);
            let response = render(&AdminBlogsTemplate::new(nav, page))?;
            Ok(ctx.finish(response))
        }
    }
}

#[get("/admin/create")]
pub async fn create_form(session: AdminSession) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let response = render(&CreateTemplate {
        nav: nav(&ctx),
        title: String::new(),
        content: String::new(),
        topics: topic_choices(""),
        error: None,
    })?;
    Ok(ctx.finish(response))
}

#[post("/admin/create")]
pub async fn create_submit(
    session: AdminSession,
    payload: Multipart,
) -> Result<HttpResponse, FrontendError> {
    let ctx = session.into_inner();
    let form = BlogForm::read(payload).await?;

    match BlogEditor::create(&ctx.api, form.to_builder()).await {
        EditorOutcome::Saved { redirect_to } => Ok(ctx.redirect(redirect_to)),
        EditorOutcome::Rejected { error } => {
            let response = render(&CreateTemplate {
                nav: nav(&ctx),
                title: form.title,
                content: form.content,
                topics: topic_choices(&form.topic),
                error: Some(error),
            })?;
            Ok(ctx.finish(response))
        }
    }
}

fn nav(ctx: &RequestContext) -> NavShell {
    NavShell::for_path(ctx.path())
}
