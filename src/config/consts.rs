// src/config/consts.rs

// Data source: where the exported CSVs are served from
pub const DEFAULT_DATA_BASE_URL: &str = "http://localhost:8000/assets/data/";

// Source files, one or more per page
pub const RANKING_CSV: &str = "member_ranking_export.csv";
pub const ROLES_CSV: &str = "ranking_position_score_export.csv";
pub const KDA_MEAN_CSV: &str = "ranking_kda_mean_export.csv";
pub const DAMAGE_MEAN_CSV: &str = "ranking_damage_mean_export.csv";
pub const CHAMPION_WINRATE_CSV: &str = "ranking_champion_winrate_export.csv";
pub const CHAMPION_KDA_CSV: &str = "ranking_champion_kda_export.csv";
pub const MATCHES_CSV: &str = "match_individual_score_grouped_export.csv";

// Display
pub const PLACEHOLDER: &str = "—";
pub const SORT_ASC_HINT: &str = "▲";
pub const SORT_DESC_HINT: &str = "▼";

// Role display order on the Roles page; anything else follows in first-seen order
pub const ROLE_ORDER: [&str; 5] = ["TOP", "JG", "MID", "ADC", "SUP"];

// Local diagnostics
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Window
pub const APP_TITLE: &str = "Capita Score";
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 760;
