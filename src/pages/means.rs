// src/pages/means.rs
use crate::config::consts::{DAMAGE_MEAN_CSV, KDA_MEAN_CSV};
use crate::config::options::PageKind::{self, *};
use crate::core::format::{format_int, format_number, int_cell, number_cell};
use crate::kpi::{self, Kpi};
use crate::record::RowRecord;
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, TableConfig};

use super::{Page, PageView, Section, build_table, player_column, position_column};

pub struct MeansPage;
pub static PAGE: MeansPage = MeansPage;

/// One metric leaderboard: which column, how it's labelled and printed.
struct Metric {
    id: &'static str,
    title: &'static str,
    key: &'static str,
    label: &'static str,
    decimals: usize,
    placeholder: &'static str,
}

const KDA: Metric = Metric {
    id: "kda",
    title: "Mean KDA",
    key: "meanKDA",
    label: "Mean KDA",
    decimals: 2,
    placeholder: "Search player (KDA)...",
};

const DAMAGE: Metric = Metric {
    id: "damage",
    title: "Mean damage per minute",
    key: "meanDmgPerMin",
    label: "Dmg/min",
    decimals: 0,
    placeholder: "Search player (damage)...",
};

impl Page for MeansPage {
    fn kind(&self) -> PageKind { Means }
    fn label(&self) -> &'static str { "Means" }
    fn sources(&self) -> &'static [&'static str] { &[KDA_MEAN_CSV, DAMAGE_MEAN_CSV] }

    fn build(&self, session: &Session) -> PageView {
        let kda_rows = session.source(KDA_MEAN_CSV).to_vec();
        let dmg_rows = session.source(DAMAGE_MEAN_CSV).to_vec();

        let kpis = vec![
            Kpi::accent("Best mean KDA", format_number(kpi::max_of(&kda_rows, KDA.key), 2)),
            Kpi::accent("Highest mean dmg/min", format_number(kpi::max_of(&dmg_rows, DAMAGE.key), 0)),
            Kpi::new("Ranked players", format_int(kda_rows.len().max(dmg_rows.len()) as f64)),
        ];

        let sections = [(KDA, kda_rows), (DAMAGE, dmg_rows)]
            .into_iter()
            .filter_map(|(metric, rows)| metric_section(self.label(), &metric, rows))
            .collect();

        PageView::new("Means", kpis, sections)
    }
}

fn metric_section(page: &str, metric: &Metric, rows: Vec<RowRecord>) -> Option<Section> {
    let decimals = metric.decimals;
    let columns = vec![
        position_column(),
        player_column(),
        ColumnSpec::numeric("matches", "P").format(int_cell),
        ColumnSpec::numeric(metric.key, metric.label).format(move |v| number_cell(v, decimals)),
        ColumnSpec::numeric("meanFinalScore", "Score").format(|v| number_cell(v, 1)),
    ];
    let config = TableConfig::new(columns, rows).sort_by(metric.key, SortDir::Descending);

    let table = build_table(page, config)?;
    Some(Section::new(metric.id, metric.title, table).searchable(&["nick", "tag"], metric.placeholder))
}
