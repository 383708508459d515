// src/pages/champions.rs
use crate::config::consts::{CHAMPION_KDA_CSV, CHAMPION_WINRATE_CSV};
use crate::config::options::PageKind::{self, *};
use crate::core::format::{format_int, format_number, format_percent, int_cell, number_cell, percent_cell};
use crate::kpi::{self, Kpi};
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, TableConfig};

use super::{Page, PageView, Section, build_table, position_column};

pub struct ChampionsPage;
pub static PAGE: ChampionsPage = ChampionsPage;

fn champion() -> ColumnSpec {
    ColumnSpec::text("champion_name", "Champion").default_dir(SortDir::Ascending)
}

fn games() -> ColumnSpec {
    ColumnSpec::numeric("matches", "Games").format(int_cell)
}

fn win_rate() -> ColumnSpec {
    ColumnSpec::numeric("winRate", "Win rate").format(|v| percent_cell(v, 1))
}

fn mean_kda() -> ColumnSpec {
    ColumnSpec::numeric("meanKDA", "Mean KDA").format(|v| number_cell(v, 2))
}

fn score() -> ColumnSpec {
    ColumnSpec::numeric("meanFinalScore", "Score").format(|v| number_cell(v, 1))
}

impl Page for ChampionsPage {
    fn kind(&self) -> PageKind { Champions }
    fn label(&self) -> &'static str { "Champions" }
    fn sources(&self) -> &'static [&'static str] { &[CHAMPION_WINRATE_CSV, CHAMPION_KDA_CSV] }

    fn build(&self, session: &Session) -> PageView {
        let wr_rows = session.source(CHAMPION_WINRATE_CSV).to_vec();
        let kda_rows = session.source(CHAMPION_KDA_CSV).to_vec();

        let kpis = vec![
            Kpi::accent("Best win rate", format_percent(kpi::max_of(&wr_rows, "winRate"), 1)),
            Kpi::accent("Best champion KDA", format_number(kpi::max_of(&kda_rows, "meanKDA"), 2)),
            Kpi::new("Most games (champion)", format_int(kpi::max_of(&wr_rows, "matches"))),
        ];

        let mut sections = Vec::new();

        let winrate = TableConfig::new(
            vec![
                position_column(),
                champion(),
                games(),
                ColumnSpec::numeric("wins", "Wins").format(int_cell),
                win_rate(),
                mean_kda(),
                score(),
            ],
            wr_rows,
        )
        .sort_by("winRate", SortDir::Descending);
        if let Some(table) = build_table(self.label(), winrate) {
            sections.push(
                Section::new("winrate", "Win rate by champion", table)
                    .searchable(&["champion_name"], "Search champion (win rate)..."),
            );
        }

        let kda = TableConfig::new(
            vec![position_column(), champion(), games(), mean_kda(), win_rate(), score()],
            kda_rows,
        )
        .sort_by("meanKDA", SortDir::Descending);
        if let Some(table) = build_table(self.label(), kda) {
            sections.push(
                Section::new("kda", "KDA by champion", table)
                    .searchable(&["champion_name"], "Search champion (KDA)..."),
            );
        }

        PageView::new("Champions", kpis, sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WR: &str = "position,champion_name,matches,wins,winRate,meanKDA,meanFinalScore\n\
                      1,Ahri,12,9,75,3.2,70\n\
                      2,Zed,30,12,40,2.1,55\n";
    const KDA: &str = "position,champion_name,matches,meanKDA,winRate,meanFinalScore\n\
                       1,Lulu,5,5.5,60,50\n\
                       2,Zed,30,2.1,40,55\n";

    #[test]
    fn kpis_and_tables() {
        let session = Session::from_texts(
            Champions,
            &[(CHAMPION_WINRATE_CSV, WR), (CHAMPION_KDA_CSV, KDA)],
        );
        let view = PAGE.build(&session);

        let values: Vec<&str> = view.kpis.iter().map(|k| k.value.as_str()).collect();
        assert_eq!(values, ["75.0%", "5.50", "30"]);

        let wr = view.section("winrate").unwrap().table.snapshot();
        assert_eq!(wr.column("champion_name"), ["Ahri", "Zed"]);
        assert_eq!(wr.column("winRate"), ["75.0%", "40.0%"]);

        let kda = view.section("kda").unwrap().table.snapshot();
        assert_eq!(kda.column("champion_name"), ["Lulu", "Zed"]);
    }

    #[test]
    fn search_is_by_champion_name() {
        let session = Session::from_texts(Champions, &[(CHAMPION_WINRATE_CSV, WR)]);
        let mut view = PAGE.build(&session);
        let section = &mut view.sections[0];
        section.set_query("zed");
        assert_eq!(section.table.visible_len(), 1);
        section.set_query("12");
        assert_eq!(section.table.visible_len(), 0);
    }
}
