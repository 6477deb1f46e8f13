// Unit tests for rendered views
// Admin table rows, empty states and the navigation chrome

use crate::templates::{
    AdminBlogTemplate, AdminBlogsTemplate, BlogsTemplate, NavShell, StatsTemplate, topic_choices,
};

use client_core::pages::{AdminBlogPage, AdminBlogsPage, BlogListPage, NO_BLOGS_MESSAGE, StatsPage};
use client_core::shaping::{BLOGS_ENVELOPE_KEY, blogs_from_value};

use models::{Blog, BlogId};

use askama::Template;
use serde_json::json;

fn admin_list(blogs: Vec<Blog>) -> String {
    let page = AdminBlogsPage {
        blogs,
        ..AdminBlogsPage::default()
    };
    AdminBlogsTemplate::new(NavShell::for_path("/admin/blogs"), page)
        .render()
        .unwrap()
}

/// **VALUE**: Verifies one API record renders exactly one admin row with its title and views.
///
/// **WHY THIS MATTERS**: The admin table is where posts are found to edit or delete.
/// Duplicated or missing rows mean acting on the wrong post.
///
/// **BUG THIS CATCHES**: Would catch the envelope not being unwrapped, or the row
/// template dropping the views column.
#[test]
fn given_one_blog_in_envelope_when_rendering_admin_list_then_one_row() {
    let blogs = blogs_from_value(
        json!({ "blogs": [{ "id": 1, "title": "A", "views": 5 }] }),
        BLOGS_ENVELOPE_KEY,
    )
    .unwrap();

    let html = admin_list(blogs);

    assert_eq!(html.matches("class=\"blog-row\"").count(), 1);
    assert!(html.contains(">A</a>"));
    assert!(html.contains("<td class=\"views\">5</td>"));
    assert!(html.contains("/admin/blogs/1/delete"));
    assert!(!html.contains(NO_BLOGS_MESSAGE));
}

/// **VALUE**: Verifies an empty list renders the empty-state message and no rows.
///
/// **WHY THIS MATTERS**: An empty table with headers only looks like a loading bug.
///
/// **BUG THIS CATCHES**: Would catch the `is_empty` branch being removed.
#[test]
fn given_empty_envelope_when_rendering_admin_list_then_empty_message_only() {
    let blogs = blogs_from_value(json!({ "blogs": [] }), BLOGS_ENVELOPE_KEY).unwrap();

    let html = admin_list(blogs);

    assert!(html.contains(NO_BLOGS_MESSAGE));
    assert_eq!(html.matches("class=\"blog-row\"").count(), 0);
}

/// **VALUE**: Verifies admin routes get admin chrome and public routes get public chrome.
///
/// **WHY THIS MATTERS**: The logout button only exists in the admin bar; public readers
/// must never see it, and admins need it on every admin page.
///
/// **BUG THIS CATCHES**: Would catch `NavShell::for_path` ignoring the route.
#[test]
fn given_route_when_rendering_then_matching_chrome_used() {
    let admin_html = admin_list(Vec::new());
    assert!(admin_html.contains("admin-nav"));
    assert!(admin_html.contains("action=\"/logout\""));
    assert!(!admin_html.contains("public-nav"));

    let public_html = BlogsTemplate::new(NavShell::for_path("/blogs"), BlogListPage::default())
        .render()
        .unwrap();
    assert!(public_html.contains("public-nav"));
    assert!(!public_html.contains("action=\"/logout\""));
}

#[test]
fn given_search_results_when_rendering_public_list_then_query_shown_and_filters_hidden() {
    let page = BlogListPage {
        query: Some(String::from("pasta")),
        ..BlogListPage::default()
    };

    let html = BlogsTemplate::new(NavShell::for_path("/blogs"), page)
        .render()
        .unwrap();

    assert!(html.contains("Search results for \"pasta\""));
    assert!(!html.contains("class=\"topics\""));
    assert!(html.contains(NO_BLOGS_MESSAGE));
}

#[test]
fn given_list_error_when_rendering_public_list_then_error_shown_instead_of_empty_state() {
    let page = BlogListPage {
        error: Some(String::from("Error fetching blogs")),
        ..BlogListPage::default()
    };

    let html = BlogsTemplate::new(NavShell::for_path("/blogs"), page)
        .render()
        .unwrap();

    assert!(html.contains("Error fetching blogs"));
    assert!(!html.contains(NO_BLOGS_MESSAGE));
}

/// **VALUE**: Verifies post content is HTML-escaped.
///
/// **WHY THIS MATTERS**: Titles and bodies come from the API. Rendering them raw would
/// let any stored `<script>` run in an admin's browser, next to their session.
///
/// **BUG THIS CATCHES**: Would catch a `|safe` filter added to content output.
#[test]
fn given_markup_in_title_when_rendering_then_escaped() {
    let html = admin_list(vec![Blog {
        id: BlogId::from(2),
        title: String::from("<script>alert(1)</script>"),
        ..Blog::default()
    }]);

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn given_stats_when_rendering_then_top_blogs_link_to_admin_detail() {
    let page = StatsPage {
        total_blogs: 2,
        total_views: 30,
        top_blogs: vec![Blog {
            id: BlogId::from(9),
            title: String::from("Top"),
            views: 20,
            ..Blog::default()
        }],
        error: None,
    };

    let html = StatsTemplate {
        nav: NavShell::for_path("/admin/stats"),
        page,
    }
    .render()
    .unwrap();

    assert_eq!(html.matches("class=\"top-row\"").count(), 1);
    assert!(html.contains("href=\"/admin/blogs/9\""));
}

#[test]
fn given_editing_page_when_rendering_then_form_prefilled_with_topic_selected() {
    let page = AdminBlogPage {
        id: BlogId::from(4),
        blog: Some(Blog {
            id: BlogId::from(4),
            title: String::from("Old title"),
            topic: String::from("finance"),
            ..Blog::default()
        }),
        editing: true,
        error: None,
    };

    let html = AdminBlogTemplate::new(NavShell::for_path("/admin/blogs/4"), page)
        .render()
        .unwrap();

    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(html.contains("value=\"Old title\""));
    assert!(html.contains("<option value=\"finance\" selected>"));
}

#[test]
fn given_selected_topic_when_building_choices_then_all_excluded_and_one_selected() {
    let choices = topic_choices("Food");

    assert!(choices.iter().all(|c| c.value != "all"));
    let selected: Vec<_> = choices.iter().filter(|c| c.selected).map(|c| c.value).collect();
    assert_eq!(selected, vec!["food"]);
}
