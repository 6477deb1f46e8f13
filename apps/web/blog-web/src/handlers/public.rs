use crate::context::RequestContext;
use crate::error::FrontendError;
use crate::forms::BlogsQuery;
use crate::templates::{
    BlogDetailTemplate, BlogsTemplate, HomeTemplate, NavShell, NotFoundTemplate, render,
    render_with_status,
};

use client_core::pages::blog_detail::NOT_FOUND_MESSAGE;
use client_core::pages::{BlogDetailPage, BlogListPage, HomePage, TopicFilter};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

#[get("/")]
pub async fn home(ctx: RequestContext) -> Result<HttpResponse, FrontendError> {
    let page = HomePage::load(&ctx.api).await;
    let response = render(&HomeTemplate::new(NavShell::for_path(ctx.path()), page))?;
    Ok(ctx.finish(response))
}

#[get("/blogs")]
pub async fn blogs(
    ctx: RequestContext,
    query: web::Query<BlogsQuery>,
) -> Result<HttpResponse, FrontendError> {
    let topic = TopicFilter::parse(query.topic.as_deref());
    let page = BlogListPage::load(&ctx.api, query.q.as_deref(), topic).await;

    let response = render(&BlogsTemplate::new(NavShell::for_path(ctx.path()), page))?;
    Ok(ctx.finish(response))
}

#[get("/blogs/{slug}")]
pub async fn blog_detail(
    ctx: RequestContext,
    slug: web::Path<String>,
) -> Result<HttpResponse, FrontendError> {
    let page = BlogDetailPage::load(&ctx.api, &slug).await;
    let nav = NavShell::for_path(ctx.path());

    let response = match page.blog {
        Some(blog) => render(&BlogDetailTemplate {
            nav,
            blog,
            related: page.related,
        })?,
        None => render_with_status(
            StatusCode::NOT_FOUND,
            &NotFoundTemplate {
                nav,
                message: NOT_FOUND_MESSAGE,
            },
        )?,
    };

    Ok(ctx.finish(response))
}
