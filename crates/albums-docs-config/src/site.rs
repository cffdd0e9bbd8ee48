//! Site configuration types.
//!
//! These are the values a static-site build tool reads to render the top
//! navigation bar, the sidebar, the footer and the search box.

use serde::{Deserialize, Serialize};

/// Link shown in the navigation bar or the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Absolute document path (e.g., "/tutorial/step-1").
    pub target_path: String,
}

impl NavItem {
    pub(crate) fn new(label: &str, target_path: &str) -> Self {
        Self {
            label: label.to_owned(),
            target_path: target_path.to_owned(),
        }
    }
}

/// Titled group of sidebar links, rendered in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Links in render order.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Number of links in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no links.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Labels for the previous/next page links in the footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLabels {
    pub previous: String,
    pub next: String,
}

/// Search backend used by the generated site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built alongside the site.
    #[default]
    Local,
    /// Hosted search service.
    External,
}

/// Where a link was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkLocation<'a> {
    /// Top navigation bar.
    Navigation,
    /// Sidebar group with the given title.
    Sidebar(&'a str),
}

impl std::fmt::Display for LinkLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Navigation => f.write_str("navigation"),
            Self::Sidebar(title) => write!(f, "sidebar \"{title}\""),
        }
    }
}

/// Site configuration consumed by the build tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// URL prefix the site is deployed under.
    pub base_path: String,
    pub title: String,
    pub description: String,
    /// BCP 47 language tag.
    pub language: String,
    /// Top navigation bar links.
    pub navigation: Vec<NavItem>,
    /// Sidebar groups in render order.
    pub sidebar: Vec<SidebarGroup>,
    pub footer_labels: FooterLabels,
    pub footer_message: String,
    pub search_provider: SearchProvider,
}

impl SiteConfig {
    /// Iterate over every declared link with its location.
    ///
    /// Navigation links come first, then sidebar links group by group.
    pub fn all_links(&self) -> impl Iterator<Item = (LinkLocation<'_>, &NavItem)> {
        let nav = self
            .navigation
            .iter()
            .map(|item| (LinkLocation::Navigation, item));
        let sidebar = self.sidebar.iter().flat_map(|group| {
            group
                .items
                .iter()
                .map(move |item| (LinkLocation::Sidebar(&group.title), item))
        });
        nav.chain(sidebar)
    }
}
