// Unit tests for page view state that needs no API
// Loaders that fetch are covered by the integration tests

use crate::pages::blog_list::TOPICS;
use crate::pages::{BlogListPage, DashboardPage, TopicFilter};

use models::{Blog, BlogStats};

#[test]
fn given_topic_values_when_parsed_then_all_and_blank_mean_no_filter() {
    assert_eq!(TopicFilter::parse(None), TopicFilter::All);
    assert_eq!(TopicFilter::parse(Some("")), TopicFilter::All);
    assert_eq!(TopicFilter::parse(Some("ALL")), TopicFilter::All);
    assert_eq!(
        TopicFilter::parse(Some(" Food ")),
        TopicFilter::Topic(String::from("food"))
    );
}

/// **VALUE**: Verifies the filter bar marks exactly the active topic.
///
/// **WHY THIS MATTERS**: The selected button is the only feedback the reader gets about
/// which filter is applied to the grid.
///
/// **BUG THIS CATCHES**: Would catch `all` staying selected once a topic is picked.
#[test]
fn given_topic_selected_when_building_options_then_only_that_option_selected() {
    let page = BlogListPage {
        topic: TopicFilter::Topic(String::from("finance")),
        ..BlogListPage::default()
    };

    let options = page.topic_options();

    assert_eq!(options.len(), TOPICS.len());
    let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.value).collect();
    assert_eq!(selected, vec!["finance"]);

    let finance = options.iter().find(|o| o.value == "finance").unwrap();
    assert_eq!(finance.label, "Finance");
    assert_eq!(finance.href, "/blogs?topic=finance");

    let all = &options[0];
    assert_eq!(all.value, "all");
    assert_eq!(all.href, "/blogs");
}

#[test]
fn given_search_query_when_rendering_list_then_topic_filters_hidden() {
    let searching = BlogListPage {
        query: Some(String::from("rust")),
        ..BlogListPage::default()
    };
    assert!(!searching.show_topic_filters());
    assert!(BlogListPage::default().show_topic_filters());
}

/// **VALUE**: Verifies the dashboard renders placeholders when stats failed to load.
///
/// **WHY THIS MATTERS**: The stats endpoint failing must not take the dashboard down;
/// the cards show zero and `N/A` instead.
///
/// **BUG THIS CATCHES**: Would catch accessors assuming `stats` is always present.
#[test]
fn given_missing_stats_when_reading_dashboard_then_zero_and_na() {
    let page = DashboardPage::default();

    assert_eq!(page.total_blogs(), 0);
    assert_eq!(page.total_views(), 0);
    assert_eq!(page.top_blog_label(), "N/A");
    assert!(page.recent_blogs().is_empty());
}

#[test]
fn given_stats_when_reading_dashboard_then_values_forwarded() {
    let page = DashboardPage {
        stats: Some(BlogStats {
            total_blogs: 4,
            total_views: 120,
            top_blog: Some(Blog {
                title: String::from("Hot"),
                views: 80,
                ..Blog::default()
            }),
            top_blogs: Vec::new(),
            recent_blogs: vec![Blog::default()],
        }),
    };

    assert_eq!(page.total_blogs(), 4);
    assert_eq!(page.total_views(), 120);
    assert_eq!(page.top_blog_label(), "Hot (80 views)");
    assert_eq!(page.recent_blogs().len(), 1);
}
