//! Generic table renderer shared by every dashboard listing.
//!
//! A page hands its rows and a static [`TableConfig`] to
//! [`TableConfig::render`], which applies the status tab and search filters
//! from the query string and produces the cells the template prints.

pub mod configs;
pub mod rows;

use serde::Deserialize;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

/// A status filter: keeps rows whose `field` equals `matches`.
#[derive(Debug, Clone, Copy)]
pub struct Tab {
    pub label: &'static str,
    pub value: &'static str,
    pub field: &'static str,
    pub matches: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    pub title: &'static str,
    pub columns: &'static [Column],
    pub tabs: &'static [Tab],
    pub search_key: &'static str,
    pub search_placeholder: &'static str,
}

/// Badge colours understood by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Green => "badge badge-green",
            Tone::Yellow => "badge badge-yellow",
            Tone::Red => "badge badge-red",
            Tone::Blue => "badge badge-blue",
            Tone::Gray => "badge badge-gray",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    /// Secondary line under the main text.
    pub detail: Option<String>,
    pub badge: Option<&'static str>,
    pub muted: bool,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            muted: true,
            ..Self::default()
        }
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            badge: Some(tone.class()),
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A row a [`TableConfig`] can display.
pub trait TableRow {
    /// The rendered cell for a column key.
    fn cell(&self, column: &str) -> Cell;

    /// Flat value of a named field, used by tab filters and search.
    fn field(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TabLink {
    pub label: &'static str,
    pub value: &'static str,
    pub active: bool,
    pub count: usize,
}

/// Everything the table template needs.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    pub tabs: Vec<TabLink>,
    pub active_tab: String,
    pub search: String,
    pub search_placeholder: &'static str,
}

pub const ALL_TAB: &str = "all";

impl TableConfig {
    fn tab(&self, value: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.value == value)
    }

    fn matches_search<R: TableRow>(&self, row: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        row.field(self.search_key)
            .map(|v| v.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    pub fn render<R: TableRow>(&self, rows: &[R], query: &TableQuery) -> RenderedTable {
        let search = query.q.as_deref().map(str::trim).unwrap_or_default().to_string();
        let needle = search.to_lowercase();

        let active = query
            .tab
            .as_deref()
            .and_then(|v| self.tab(v))
            .copied();

        let searched: Vec<&R> = rows
            .iter()
            .filter(|row| self.matches_search(*row, &needle))
            .collect();

        let mut tabs = Vec::with_capacity(self.tabs.len() + 1);
        tabs.push(TabLink {
            label: "All",
            value: ALL_TAB,
            active: active.is_none(),
            count: searched.len(),
        });
        for tab in self.tabs {
            tabs.push(TabLink {
                label: tab.label,
                value: tab.value,
                active: active.is_some_and(|a| a.value == tab.value),
                count: searched.iter().filter(|row| tab_matches(tab, **row)).count(),
            });
        }

        let visible: Vec<Vec<Cell>> = searched
            .into_iter()
            .filter(|row| active.as_ref().is_none_or(|tab| tab_matches(tab, *row)))
            .map(|row| self.columns.iter().map(|c| row.cell(c.key)).collect())
            .collect();

        RenderedTable {
            title: self.title,
            headers: self.columns.iter().map(|c| c.header).collect(),
            rows: visible,
            tabs,
            active_tab: active.map(|t| t.value).unwrap_or(ALL_TAB).to_string(),
            search,
            search_placeholder: self.search_placeholder,
        }
    }
}

fn tab_matches<R: TableRow>(tab: &Tab, row: &R) -> bool {
    row.field(tab.field).as_deref() == Some(tab.matches)
}
