//! Pagination window: which page numbers (and gaps) a pager control shows.

use serde::{Serialize, Serializer};

/// One slot in the pager control: a page number or an ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Gap => serializer.serialize_str("..."),
        }
    }
}

impl core::fmt::Display for PageItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Gap => f.write_str("..."),
        }
    }
}

/// Compute the pager window for `current_page` of `total_pages`.
///
/// Seven or fewer pages are shown in full. Otherwise the window keeps the
/// first and last pages visible and collapses the rest behind ellipses,
/// anchored to whichever end the current page is near.
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    use PageItem::{Gap, Page};

    if total_pages <= 7 {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        return vec![Page(1), Page(2), Page(3), Gap, Page(total_pages - 1), Page(total_pages)];
    }

    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Page(2),
            Gap,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    vec![
        Page(1),
        Gap,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Gap,
        Page(total_pages),
    ]
}
