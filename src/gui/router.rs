// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::records::PAGE,
    &pages::compare::PAGE,
    &pages::continents::PAGE,
    &pages::map::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

/// Tab index of a page kind.
pub fn index_of(kind: &PageKind) -> Option<usize> {
    PAGES.iter().position(|p| &p.kind() == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_one_tab() {
        for kind in [PageKind::Records, PageKind::Compare, PageKind::Continents, PageKind::Map] {
            let ix = index_of(&kind).unwrap();
            assert_eq!(PAGES[ix].kind(), kind);
        }
        assert_eq!(PAGES.len(), 4);
    }
}
