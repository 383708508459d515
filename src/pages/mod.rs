// src/pages/mod.rs
//! Dashboard pages.
//!
//! A page names the CSV sources it needs and, given a loaded `Session`, builds a
//! `PageView`: a title, a KPI strip and a list of table sections. Page builders
//! are pure; the GUI only draws what they return and forwards clicks and typed
//! queries back into the view.

use crate::config::options::PageKind;
use crate::core::sanitize::normalize_text;
use crate::core::format::int_cell;
use crate::kpi::Kpi;
use crate::record::RowRecord;
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, SortableTable, TableConfig};

pub mod champions;
pub mod matches;
pub mod means;
pub mod ranking;
pub mod roles;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;

    /// Tab label.
    fn label(&self) -> &'static str;

    /// CSV file names, resolved against the data base URL.
    fn sources(&self) -> &'static [&'static str];

    fn build(&self, session: &Session) -> PageView;
}

/* ---------- view model ---------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub accent: bool,
}

impl Badge {
    pub fn new(label: &str, value: String) -> Self {
        Self { label: s!(label), value, accent: false }
    }

    pub fn accent(label: &str, value: String) -> Self {
        Self { label: s!(label), value, accent: true }
    }
}

/// Search box state of one section. `keys` empty means every column.
#[derive(Clone, Debug, Default)]
pub struct SectionSearch {
    pub keys: Vec<String>,
    pub placeholder: String,
    pub query: String,
}

/// A titled card holding one table.
#[derive(Clone, Debug)]
pub struct Section {
    /// Stable within a page; the GUI salts widget ids with it.
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badges: Vec<Badge>,
    pub table: SortableTable,
    pub search: Option<SectionSearch>,
    pub collapsible: bool,
    pub open: bool,
}

impl Section {
    pub fn new(id: &str, title: &str, table: SortableTable) -> Self {
        Self {
            id: s!(id),
            title: s!(title),
            subtitle: None,
            badges: Vec::new(),
            table,
            search: None,
            collapsible: false,
            open: true,
        }
    }

    pub fn subtitle(mut self, text: &str) -> Self {
        self.subtitle = Some(s!(text));
        self
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn searchable(mut self, keys: &[&str], placeholder: &str) -> Self {
        self.search = Some(SectionSearch {
            keys: keys.iter().map(|k| s!(*k)).collect(),
            placeholder: s!(placeholder),
            query: String::new(),
        });
        self
    }

    /// Collapsible card, initially closed unless `open`.
    pub fn collapsible(mut self, open: bool) -> Self {
        self.collapsible = true;
        self.open = open;
        self
    }

    pub fn query(&self) -> &str {
        self.search.as_ref().map(|s| s.query.as_str()).unwrap_or("")
    }

    /// Typed text in the search box.
    pub fn set_query(&mut self, query: &str) {
        if let Some(search) = self.search.as_mut() {
            search.query = s!(query);
        }
        self.apply_query();
    }

    /// The "Clear" button.
    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Header click; the typed query keeps applying after the re-sort.
    pub fn sort_by_header(&mut self, key: &str) -> bool {
        let changed = self.table.activate_header(key);
        if changed {
            self.apply_query();
        }
        changed
    }

    /// Everything a reader sees on the card, for page-level search.
    pub fn search_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        parts.extend(self.subtitle.iter().cloned());
        for b in &self.badges {
            parts.push(join!(&b.label, " ", &b.value));
        }
        parts.push(self.table.snapshot().text_content());
        parts.join(" ")
    }

    fn apply_query(&mut self) {
        let Some(search) = self.search.as_ref() else { return };
        if search.query.trim().is_empty() {
            self.table.filter_by_text("", None);
            return;
        }
        let keys: Vec<&str> = search.keys.iter().map(String::as_str).collect();
        let query = search.query.clone();
        self.table.filter_by_text(&query, Some(keys.as_slice()));
    }
}

/// Page-wide search over whole sections (the matches page).
#[derive(Clone, Debug, Default)]
pub struct PageSearch {
    pub placeholder: String,
    pub query: String,
}

#[derive(Clone, Debug)]
pub struct PageView {
    pub title: String,
    pub kpis: Vec<Kpi>,
    pub sections: Vec<Section>,
    pub search: Option<PageSearch>,
    /// Parallel to `sections`; set by the page-level search.
    hidden: Vec<bool>,
}

impl PageView {
    pub fn new(title: &str, kpis: Vec<Kpi>, sections: Vec<Section>) -> Self {
        let hidden = vec![false; sections.len()];
        Self { title: s!(title), kpis, sections, search: None, hidden }
    }

    pub fn with_search(mut self, placeholder: &str) -> Self {
        self.search = Some(PageSearch { placeholder: s!(placeholder), query: String::new() });
        self
    }

    /// Hide every section whose text doesn't contain `query`
    /// (case and diacritics ignored). Empty shows all.
    pub fn set_search_query(&mut self, query: &str) {
        if let Some(search) = self.search.as_mut() {
            search.query = s!(query);
        }
        let q = normalize_text(query.trim());
        self.hidden = self
            .sections
            .iter()
            .map(|sec| !q.is_empty() && !normalize_text(&sec.search_text()).contains(&q))
            .collect();
    }

    pub fn is_section_visible(&self, index: usize) -> bool {
        !self.hidden.get(index).copied().unwrap_or(false)
    }

    pub fn visible_sections(&self) -> usize {
        (0..self.sections.len()).filter(|&i| self.is_section_visible(i)).count()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/* ---------- shared builders ---------- */

/// Build a table; a bad column layout is logged and the section dropped.
pub(crate) fn build_table(page: &str, config: TableConfig) -> Option<SortableTable> {
    match SortableTable::new(config) {
        Ok(table) => Some(table),
        Err(e) => {
            loge!("{page}: table skipped: {e}");
            None
        }
    }
}

/// `nick#tag`, or the bare nick when the tag is blank.
pub fn player_label(row: &RowRecord) -> String {
    let nick = row.value("nick");
    match row.value("tag") {
        "" => s!(nick),
        tag => join!(nick, "#", tag),
    }
}

pub(crate) fn position_column() -> ColumnSpec {
    ColumnSpec::numeric("position", "#")
        .format(int_cell)
        .default_dir(SortDir::Ascending)
}

pub(crate) fn player_column() -> ColumnSpec {
    ColumnSpec::text("nick", "Nick")
        .compute(player_label)
        .default_dir(SortDir::Ascending)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Section {
        let rows = vec![
            record! { "nick" => "José", "matches" => "5" },
            record! { "nick" => "Bia", "matches" => "9" },
            record! { "nick" => "Ana", "matches" => "7" },
        ];
        let cols = vec![ColumnSpec::text("nick", "Nick"), ColumnSpec::numeric("matches", "P")];
        let table = SortableTable::new(TableConfig::new(cols, rows).sort_by("matches", SortDir::Descending))
            .unwrap();
        Section::new("t", "Test", table).searchable(&["nick"], "Search")
    }

    fn nicks(sec: &Section) -> Vec<String> {
        sec.table.visible_rows().map(|r| s!(r.value("nick"))).collect()
    }

    #[test]
    fn query_survives_header_click() {
        let mut sec = section();
        sec.set_query("a");
        assert_eq!(nicks(&sec), ["Bia", "Ana"]);

        assert!(sec.sort_by_header("nick"));
        assert_eq!(sec.query(), "a");
        assert_eq!(nicks(&sec), ["Bia", "Ana"]);

        assert!(sec.sort_by_header("nick"));
        assert_eq!(nicks(&sec), ["Ana", "Bia"]);
    }

    #[test]
    fn clear_restores_all_rows() {
        let mut sec = section();
        sec.set_query("jose");
        assert_eq!(nicks(&sec), ["José"]);
        sec.clear_query();
        assert_eq!(nicks(&sec), ["Bia", "Ana", "José"]);
    }

    #[test]
    fn page_search_hides_sections() {
        let mut view = PageView::new("P", vec![], vec![section(), section()]).with_search("Find");
        view.sections[1].title = s!("Other");
        view.set_search_query("other");
        assert!(!view.is_section_visible(0));
        assert!(view.is_section_visible(1));
        assert_eq!(view.visible_sections(), 1);

        view.set_search_query("");
        assert_eq!(view.visible_sections(), 2);
    }

    #[test]
    fn player_label_omits_blank_tag() {
        assert_eq!(player_label(&record! { "nick" => "Ana", "tag" => "BR1" }), "Ana#BR1");
        assert_eq!(player_label(&record! { "nick" => "Ana", "tag" => "" }), "Ana");
        assert_eq!(player_label(&record! { "nick" => "Ana" }), "Ana");
    }
}
