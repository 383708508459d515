// src/pages/matches.rs
//! Match history: one collapsible card per match.
//!
//! Each CSV row is a whole match. Its per-player scores ride along as a JSON
//! array in the `players_scores` cell:
//!
//! ```text
//! [{"team_position":"TOP","nick":"Ana","tag":"BR1","final_score":71.5}, ...]
//! ```
//!
//! A payload that doesn't parse, or isn't an array, gives an empty player
//! table. The card itself still shows.

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::MATCHES_CSV;
use crate::config::options::PageKind::{self, *};
use crate::core::format::{format_int, format_number, number_cell};
use crate::core::roles::role_label;
use crate::kpi::{self, Kpi};
use crate::record::RowRecord;
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, TableConfig};

use super::{Badge, Page, PageView, Section, build_table, player_column, position_column};

pub struct MatchesPage;
pub static PAGE: MatchesPage = MatchesPage;

/// One entry of `players_scores`. Fields are loose JSON: exports have written
/// scores both as numbers and as strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlayerScore {
    pub team_position: Value,
    pub nick: Value,
    pub tag: Value,
    pub final_score: Value,
}

impl Page for MatchesPage {
    fn kind(&self) -> PageKind { Matches }
    fn label(&self) -> &'static str { "Matches" }
    fn sources(&self) -> &'static [&'static str] { &[MATCHES_CSV] }

    fn build(&self, session: &Session) -> PageView {
        let rows = session.source(MATCHES_CSV);

        let kpis = vec![
            Kpi::accent("Matches", format_int(kpi::count(rows))),
            Kpi::new("Players (summed)", format_int(kpi::sum_of(rows, "players"))),
            Kpi::accent("Best individual score", format_number(kpi::max_of(rows, "maxFinalScore"), 1)),
        ];

        let sections = newest_first(rows)
            .into_iter()
            .filter_map(|m| match_section(self.label(), m))
            .collect();

        PageView::new("Matches", kpis, sections).with_search("Search match id or player...")
    }
}

/// Matches by `match_pk`, highest first. Blank or non-numeric keys count as 0;
/// ties keep file order.
pub fn newest_first(rows: &[RowRecord]) -> Vec<&RowRecord> {
    let pk = |r: &RowRecord| {
        let v = r.number("match_pk");
        if v.is_nan() { 0.0 } else { v }
    };
    let mut sorted: Vec<&RowRecord> = rows.iter().collect();
    sorted.sort_by(|a, b| pk(b).total_cmp(&pk(a)));
    sorted
}

/// Decode a `players_scores` cell into table rows, numbered in payload order.
pub fn player_rows(raw: &str) -> Vec<RowRecord> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let players: Vec<PlayerScore> = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        Ok(_) => {
            logd!("Matches: players_scores is not an array");
            return Vec::new();
        }
        Err(e) => {
            logd!("Matches: bad players_scores JSON: {e}");
            return Vec::new();
        }
    };

    players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            record! {
                "position" => (i + 1).to_string(),
                "team_position" => value_text(&p.team_position),
                "nick" => value_text(&p.nick),
                "tag" => value_text(&p.tag),
                "final_score" => value_text(&p.final_score),
            }
        })
        .collect()
}

/// JSON scalar as cell text; null and containers read as blank.
fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn match_title(row: &RowRecord) -> String {
    match row.value("match_riot_id") {
        "" => format!("match_pk {}", row.value("match_pk")),
        id => s!(id),
    }
}

fn match_section(page: &str, row: &RowRecord) -> Option<Section> {
    let columns = vec![
        position_column(),
        ColumnSpec::text("team_position", "Role").compute(|r| role_label(r.value("team_position"))),
        player_column(),
        ColumnSpec::numeric("final_score", "Score").format(|v| number_cell(v, 1)),
    ];
    let config = TableConfig::new(columns, player_rows(row.value("players_scores")))
        .sort_by("final_score", SortDir::Descending);
    let table = build_table(page, config)?;

    let title = match_title(row);
    let section = Section::new(&join!("match-", row.value("match_pk")), &title, table)
        .badge(Badge::new("Players", format_int(row.number("players"))))
        .badge(Badge::accent("Mean", format_number(row.number("meanFinalScore"), 1)))
        .badge(Badge::new("Max", format_number(row.number("maxFinalScore"), 1)))
        .collapsible(false);
    Some(section)
}
