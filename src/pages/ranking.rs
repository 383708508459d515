// src/pages/ranking.rs
use crate::config::consts::RANKING_CSV;
use crate::config::options::PageKind::{self, *};
use crate::core::format::{format_int, format_number, int_cell, number_cell};
use crate::kpi::{self, Kpi};
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, TableConfig};

use super::{Page, PageView, Section, build_table, player_column, position_column};

pub struct RankingPage;
pub static PAGE: RankingPage = RankingPage;

impl Page for RankingPage {
    fn kind(&self) -> PageKind { Ranking }
    fn label(&self) -> &'static str { "Ranking" }
    fn sources(&self) -> &'static [&'static str] { &[RANKING_CSV] }

    fn build(&self, session: &Session) -> PageView {
        let rows = session.source(RANKING_CSV).to_vec();

        let kpis = vec![
            Kpi::accent("Players", format_int(kpi::count(&rows))),
            Kpi::new("Matches (summed)", format_int(kpi::sum_of(&rows, "matches"))),
            Kpi::accent("Best mean score", format_number(kpi::max_of(&rows, "meanFinalScore"), 1)),
        ];

        let columns = vec![
            position_column(),
            player_column(),
            ColumnSpec::numeric("matches", "P").format(int_cell),
            ColumnSpec::numeric("meanFinalScore", "Score").format(|v| number_cell(v, 1)),
        ];
        let config = TableConfig::new(columns, rows).sort_by("meanFinalScore", SortDir::Descending);

        let sections = build_table(self.label(), config)
            .map(|table| {
                Section::new("ranking", "Member ranking", table)
                    .subtitle("Mean final score per member")
                    .searchable(&["nick", "tag"], "Search player...")
            })
            .into_iter()
            .collect();

        PageView::new("Ranking", kpis, sections)
    }
}
