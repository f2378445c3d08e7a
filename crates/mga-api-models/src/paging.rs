//! Page-window policy shared by every catalog front end.
//!
//! Page numbers here are 1-based for display; navigation targets are the
//! zero-based page indices that a [`crate::CatalogQuery`] expects.

use crate::PAGE_SIZE;

/// Maximum number of contiguous page links around the current page.
pub const WINDOW_SIZE: u32 = 5;

/// Inclusive range of 1-based page numbers shown as direct links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First page in the window.
    pub start: u32,
    /// Last page in the window.
    pub end: u32,
}

impl PageWindow {
    /// Iterate the page numbers in the window.
    pub fn pages(self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Compute the contiguous window around `current` (1-based) for `total` pages.
///
/// The window is clamped to `[1, total]` and slides left near the end so it
/// stays full whenever enough pages exist.
#[must_use]
pub fn page_window(current: u32, total: u32) -> PageWindow {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let half = WINDOW_SIZE / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = total.min(start + WINDOW_SIZE - 1);
    if end - start + 1 < WINDOW_SIZE {
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }
    PageWindow { start, end }
}

/// One element of the rendered page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Previous-page control; `None` when already on the first page.
    Prev {
        /// Zero-based page index to request.
        target: Option<u32>,
    },
    /// Direct link to a page.
    Page {
        /// 1-based page number shown to the user.
        number: u32,
        /// Whether this is the page currently displayed.
        active: bool,
        /// Zero-based page index to request; `None` for the active page.
        target: Option<u32>,
    },
    /// Gap between the window and the first or last page.
    Ellipsis,
    /// Next-page control; `None` when already on the last page.
    Next {
        /// Zero-based page index to request.
        target: Option<u32>,
    },
}

fn page_link(number: u32, current: u32) -> NavItem {
    let active = number == current;
    NavItem::Page {
        number,
        active,
        target: (!active).then(|| number - 1),
    }
}

/// Build the navigation for the 1-based `current` page out of `total`.
///
/// Returns `None` when there is at most one page, meaning the navigation is hidden.
#[must_use]
pub fn build_nav(current: u32, total: u32) -> Option<Vec<NavItem>> {
    if total <= 1 {
        return None;
    }
    let current = current.clamp(1, total);
    let window = page_window(current, total);
    let mut items = Vec::with_capacity(WINDOW_SIZE as usize + 6);

    items.push(NavItem::Prev {
        target: (current > 1).then(|| current - 2),
    });
    if window.start > 1 {
        items.push(page_link(1, current));
        if window.start > 2 {
            items.push(NavItem::Ellipsis);
        }
    }
    items.extend(window.pages().map(|number| page_link(number, current)));
    if window.end < total {
        if window.end < total - 1 {
            items.push(NavItem::Ellipsis);
        }
        items.push(page_link(total, current));
    }
    items.push(NavItem::Next {
        target: (current < total).then_some(current),
    });
    Some(items)
}

/// Whether a "load more" control should be offered.
#[must_use]
pub const fn load_more_visible(current: u32, total: u32) -> bool {
    current < total
}

/// 1-based inclusive item range shown on `page_index`, or `None` without results.
#[must_use]
pub fn showing_range(page_index: u32, total_count: u64) -> Option<(u64, u64)> {
    if total_count == 0 {
        return None;
    }
    let offset = u64::from(page_index) * u64::from(PAGE_SIZE);
    let start = (offset + 1).min(total_count);
    let end = (offset + u64::from(PAGE_SIZE)).min(total_count);
    Some((start, end))
}
