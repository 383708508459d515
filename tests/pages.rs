// tests/pages.rs
//
// Page builders over small decoded sessions. Network-free: sessions are built
// from in-memory CSV text.

use capita_score::config::consts::{MATCHES_CSV, RANKING_CSV, ROLES_CSV};
use capita_score::config::options::PageKind;
use capita_score::gui::router;
use capita_score::pages::Page;
use capita_score::session::Session;

fn build(kind: PageKind, texts: &[(&str, &str)]) -> capita_score::pages::PageView {
    router::page_for(kind).build(&Session::from_texts(kind, texts))
}

#[test]
fn ranking_kpis() {
    let csv = "position,nick,tag,matches,meanFinalScore\n1,Ana,BR1,12,81.26\n2,Bia,BR1,1000,64\n";
    let view = build(PageKind::Ranking, &[(RANKING_CSV, csv)]);
    let kpis: Vec<(&str, &str)> = view.kpis.iter().map(|k| (k.label.as_str(), k.value.as_str())).collect();
    assert_eq!(kpis, [("Players", "2"), ("Matches (summed)", "1,012"), ("Best mean score", "81.3")]);
}

#[test]
fn roles_group_in_lane_order() {
    let csv = "team_position,position,nick,matches,meanFinalScore\n\
               BOTTOM,1,Ana,3,70\n\
               MIDDLE,1,Bia,3,60\n\
               TOP,1,Caio,2,50\n\
               SUPPORT,1,Dani,2,40\n\
               JUNGLE,1,Enzo,2,30\n\
               BOT,2,Fabi,1,20\n";
    let view = build(PageKind::Roles, &[(ROLES_CSV, csv)]);
    let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["TOP", "JG", "MID", "ADC", "SUP"]);

    let adc = view.section("role-ADC").unwrap();
    assert_eq!(adc.table.visible_len(), 2);
    assert_eq!(adc.badges[0].value, "2");
}

#[test]
fn matches_newest_first_and_bad_json_is_empty() {
    let csv = "match_pk,match_riot_id,players,meanFinalScore,maxFinalScore,players_scores\n\
               3,BR1_3,0,,,[oops\n\
               10,BR1_10,0,,,\n\
               abc,BR1_X,0,,,\"[1, 2]\"\n";
    let view = build(PageKind::Matches, &[(MATCHES_CSV, csv)]);
    let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["BR1_10", "BR1_3", "BR1_X"]);
    assert!(view.sections.iter().all(|s| s.table.visible_len() == 0));
    assert_eq!(view.sections[0].badges[1].value, "—");
}

#[test]
fn empty_sources_still_build() {
    for page in router::all_pages() {
        let view = page.build(&Session::new(page.kind(), Vec::new()));
        assert!(view.sections.iter().all(|s| s.table.visible_len() == 0), "{}", page.label());
    }
}
