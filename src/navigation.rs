//! Navigation between the console's sections.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::views::{
    dashboard::DashboardView, orders::OrdersView, products::ProductsView, stock::StockView,
};

/// One of the console's sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Summary figures
    #[default]
    Dashboard,

    /// Product catalog
    Products,

    /// Order list
    Orders,

    /// Stock levels
    Stock,
}

/// Unknown section slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Products,
        Section::Orders,
        Section::Stock,
    ];

    /// Stable slug used in links and element ids.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "produtos",
            Self::Orders => "pedidos",
            Self::Stock => "estoque",
        }
    }

    /// Navigation title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Produtos",
            Self::Orders => "Pedidos",
            Self::Stock => "Estoque",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().trim_start_matches('#');

        Self::ALL
            .into_iter()
            .find(|section| section.slug() == slug)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A navigation entry as rendered in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Target section
    pub section: Section,

    /// Whether it is the visible section
    pub active: bool,
}

/// Tracks the single visible section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    /// Starts on the dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `section` the only visible section.
    pub fn show(&mut self, section: Section) {
        self.active = section;
    }

    /// The visible section.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether `section` is visible.
    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    /// Menu entries with the active one marked.
    pub fn entries(&self) -> impl Iterator<Item = NavEntry> + '_ {
        Section::ALL.into_iter().map(|section| NavEntry {
            section,
            active: self.is_visible(section),
        })
    }
}

/// A loaded section, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView {
    /// Dashboard summary
    Dashboard(DashboardView),

    /// Product catalog
    Products(ProductsView),

    /// Order list
    Orders(OrdersView),

    /// Stock levels
    Stock(StockView),
}

impl SectionView {
    /// The section this view belongs to.
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Self::Dashboard(_) => Section::Dashboard,
            Self::Products(_) => Section::Products,
            Self::Orders(_) => Section::Orders,
            Self::Stock(_) => Section::Stock,
        }
    }
}
