//! Built-in site configuration.
//!
//! Every value here is a literal; navigation and sidebar can only change by
//! editing this file.

use std::sync::LazyLock;

use crate::site::{FooterLabels, NavItem, SearchProvider, SidebarGroup, SiteConfig};

static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(load_config);

/// Tutorial steps in reading order: (label, target path).
const TUTORIAL_STEPS: [(&str, &str); 13] = [
    ("Step 1: Project setup", "/tutorial/step-1"),
    ("Step 2: Database connection", "/tutorial/step-2"),
    ("Step 3: Albums table", "/tutorial/step-3"),
    ("Step 4: Album routes", "/tutorial/step-4"),
    ("Step 5: Songs table", "/tutorial/step-5"),
    ("Step 6: Song routes", "/tutorial/step-6"),
    ("Step 7: Users and registration", "/tutorial/step-7"),
    ("Step 8: Login", "/tutorial/step-8"),
    ("Step 9: Protecting routes", "/tutorial/step-9"),
    ("Step 10: Cover uploads", "/tutorial/step-10"),
    ("Step 11: Admin listing", "/tutorial/step-11"),
    ("Step 12: Statistics", "/tutorial/step-12"),
    ("Step 13: Deployment", "/tutorial/step-13"),
];

/// Build the site configuration from its literals.
///
/// Pure and infallible: each call returns a fresh, deep-equal value.
pub fn load_config() -> SiteConfig {
    SiteConfig {
        base_path: "/albums-api/".to_owned(),
        title: "Albums API".to_owned(),
        description: "Build a CRUD REST API for albums, songs and users, step by step".to_owned(),
        language: "en-US".to_owned(),
        navigation: vec![
            NavItem::new("Home", "/"),
            NavItem::new("Tutorial", "/tutorial/step-1"),
        ],
        sidebar: vec![
            SidebarGroup {
                title: "Getting Started".to_owned(),
                items: vec![
                    NavItem::new("Introduction", "/introduction"),
                    NavItem::new("Prerequisites", "/prerequisites"),
                ],
            },
            SidebarGroup {
                title: "Tutorial".to_owned(),
                items: TUTORIAL_STEPS
                    .iter()
                    .map(|(label, path)| NavItem::new(label, path))
                    .collect(),
            },
            SidebarGroup {
                title: "Reference".to_owned(),
                items: vec![
                    NavItem::new("Endpoints", "/reference/endpoints"),
                    NavItem::new("Database schema", "/reference/schema"),
                ],
            },
        ],
        footer_labels: FooterLabels {
            previous: "Previous step".to_owned(),
            next: "Next step".to_owned(),
        },
        footer_message: "Released under the MIT License.".to_owned(),
        search_provider: SearchProvider::Local,
    }
}

/// Shared read-only configuration, built on first access.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
