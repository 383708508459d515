// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use crate::pages::{self, Page};

/// Tab order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::ranking::PAGE,
    &pages::roles::PAGE,
    &pages::means::PAGE,
    &pages::champions::PAGE,
    &pages::matches::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Ranking   => &pages::ranking::PAGE,
        Roles     => &pages::roles::PAGE,
        Means     => &pages::means::PAGE,
        Champions => &pages::champions::PAGE,
        Matches   => &pages::matches::PAGE,
    }
}
