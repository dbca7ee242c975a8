//! Windowed pagination markers
//!
//! Paginated views show the first page, the last page and the pages adjacent
//! to the current one; every run of hidden pages collapses into a single
//! ellipsis marker.

use serde::ser::{Serialize, Serializer};

/// One slot in a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Compute the visible page markers for a pagination control
pub fn windowed_pages(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let mut markers = Vec::new();
    let mut last_shown = 0u32;

    for page in 1..=total_pages {
        let near_current = page.abs_diff(current) <= 1;
        if page == 1 || page == total_pages || near_current {
            if last_shown != 0 && page - last_shown > 1 {
                markers.push(PageMarker::Ellipsis);
            }
            markers.push(PageMarker::Page(page));
            last_shown = page;
        }
    }

    markers
}
