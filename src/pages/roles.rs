// src/pages/roles.rs
//
// One leaderboard per role. The export mixes Riot's role names with short forms,
// so rows are grouped by canonical role: the five standard roles first, in lane
// order, then anything else in the order it first shows up.

use indexmap::IndexMap;

use crate::config::consts::{ROLE_ORDER, ROLES_CSV};
use crate::config::options::PageKind::{self, *};
use crate::core::format::{format_int, int_cell, number_cell};
use crate::core::roles::role_label;
use crate::record::RowRecord;
use crate::session::Session;
use crate::table::{ColumnSpec, SortDir, TableConfig};

use super::{Badge, Page, PageView, Section, build_table, position_column};

pub struct RolesPage;
pub static PAGE: RolesPage = RolesPage;

impl Page for RolesPage {
    fn kind(&self) -> PageKind { Roles }
    fn label(&self) -> &'static str { "Roles" }
    fn sources(&self) -> &'static [&'static str] { &[ROLES_CSV] }

    fn build(&self, session: &Session) -> PageView {
        let sections = group_by_role(session.source(ROLES_CSV))
            .into_iter()
            .filter_map(|(role, rows)| role_section(self.label(), &role, rows))
            .collect();

        PageView::new("Ranking by role", Vec::new(), sections)
    }
}

/// Rows keyed by canonical role, in display order.
pub fn group_by_role(rows: &[RowRecord]) -> IndexMap<String, Vec<RowRecord>> {
    let mut seen: IndexMap<String, Vec<RowRecord>> = IndexMap::new();
    for row in rows {
        let role = role_label(row.value("team_position"));
        let row = row.with_value("team_position", role.as_str());
        seen.entry(role).or_default().push(row);
    }

    let mut ordered = IndexMap::with_capacity(seen.len());
    for role in ROLE_ORDER {
        if let Some(rows) = seen.shift_remove(role) {
            ordered.insert(s!(role), rows);
        }
    }
    ordered.extend(seen);
    ordered
}

fn role_section(page: &str, role: &str, rows: Vec<RowRecord>) -> Option<Section> {
    let players = format_int(rows.len() as f64);
    let columns = vec![
        position_column(),
        ColumnSpec::text("nick", "Nick").default_dir(SortDir::Ascending),
        ColumnSpec::numeric("matches", "P").format(int_cell),
        ColumnSpec::numeric("meanFinalScore", "Score").format(|v| number_cell(v, 1)),
    ];
    let config = TableConfig::new(columns, rows).sort_by("meanFinalScore", SortDir::Descending);

    let table = build_table(page, config)?;
    let section = Section::new(&join!("role-", role), role, table)
        .subtitle("Ranking by score (position)")
        .badge(Badge::accent("Players", players))
        .searchable(&["nick"], &format!("Search ({role})..."));
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "team_position,position,nick,matches,meanFinalScore\n\
                       UTILITY,1,Sol,3,50\n\
                       COACH,1,Zed,1,10\n\
                       TOP,1,Ana,5,90\n\
                       jungle,1,Bia,4,80\n\
                       TOP,2,Caio,5,70\n\
                       ,1,Nil,1,5\n";

    #[test]
    fn roles_follow_lane_order_then_first_seen() {
        let rows = crate::csv::decode(CSV);
        let groups = group_by_role(&rows);
        let roles: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(roles, ["TOP", "JG", "SUP", "COACH", "—"]);
        assert_eq!(groups["TOP"].len(), 2);
        assert_eq!(groups["JG"][0].value("team_position"), "JG");
    }

    #[test]
    fn one_section_per_role_with_player_badge() {
        let session = Session::from_texts(Roles, &[(ROLES_CSV, CSV)]);
        let view = PAGE.build(&session);
        assert!(view.kpis.is_empty());
        assert_eq!(view.sections.len(), 5);

        let top = view.section("role-TOP").unwrap();
        assert_eq!(top.badges[0].value, "2");
        assert_eq!(top.table.snapshot().column("nick"), ["Ana", "Caio"]);
    }
}
