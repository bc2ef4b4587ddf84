/// Above this many pages the window also links the "shoulder" pages
/// `2` and `last - 1`.
pub const SHOULDER_THRESHOLD: i64 = 5;

/// `max(ceil(total / per_page), 1)`. Requires `per_page > 0` and `total >= 0`.
pub fn last_page(total: i64, per_page: i64) -> i64 {
    let pages = total / per_page + i64::from(total % per_page != 0);
    pages.max(1)
}

/// Whether page `i` belongs to the window around `current_page`.
pub fn should_include(i: i64, current_page: i64, last_page: i64) -> bool {
    if i == 1 || i == last_page {
        return true;
    }
    if current_page.saturating_sub(1) <= i && i <= current_page.saturating_add(1) {
        return true;
    }
    last_page > SHOULDER_THRESHOLD && (i == 2 || i == last_page - 1)
}

/// Page numbers in `1..=last_page` to show as links, ascending and distinct.
///
/// Only the handful of numbers that [`should_include`] can accept are tested,
/// so the cost does not grow with `last_page`.
pub fn select_pages(current_page: i64, last_page: i64) -> Vec<i64> {
    let mut candidates = [
        1,
        2,
        current_page.saturating_sub(1),
        current_page,
        current_page.saturating_add(1),
        last_page - 1,
        last_page,
    ];
    candidates.sort_unstable();

    let mut pages = Vec::with_capacity(candidates.len());
    for i in candidates {
        if !(1..=last_page).contains(&i) || pages.last() == Some(&i) {
            continue;
        }
        if should_include(i, current_page, last_page) {
            pages.push(i);
        }
    }
    pages
}
