//! Carousel paging
//!
//! A carousel shows a fixed-size window of a result list. The first item is
//! reserved for the hero banner and never appears in a window, so paging works
//! over `items[1..]`. The last page index is
//! `floor((len - 1) / page_size) - 1`, clamped at zero: a trailing partial
//! page is not reachable.
//!
//! Page changes are gated by a `leaving` flag. Turning a page sets it, and it
//! stays set until the slide animation reports completion through
//! [`Pager::finish_transition`]. Turns requested in between are ignored.

/// Largest reachable page index for a list of `len` items
pub fn max_index(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (len.saturating_sub(1) / page_size).saturating_sub(1)
}

/// Number of reachable pages (always at least one)
pub fn page_count(len: usize, page_size: usize) -> usize {
    max_index(len, page_size) + 1
}

/// The items shown on page `index`, excluding the hero item
pub fn window<T>(items: &[T], index: usize, page_size: usize) -> &[T] {
    let paged = items.get(1..).unwrap_or(&[]);
    let start = index.saturating_mul(page_size).min(paged.len());
    let end = start.saturating_add(page_size).min(paged.len());
    &paged[start..end]
}

/// Advance the page index with wraparound
///
/// A no-op while `leaving` is set. An empty list or a single reachable page
/// gives index 0 without touching `leaving`, since there is no page to slide to.
pub fn next_page<T>(current: usize, items: &[T], page_size: usize, leaving: &mut bool) -> usize {
    turn(current, items, page_size, leaving, TurnDirection::Forward)
}

/// Step the page index back with wraparound
pub fn prev_page<T>(current: usize, items: &[T], page_size: usize, leaving: &mut bool) -> usize {
    turn(current, items, page_size, leaving, TurnDirection::Backward)
}

fn turn<T>(
    current: usize,
    items: &[T],
    page_size: usize,
    leaving: &mut bool,
    direction: TurnDirection,
) -> usize {
    if *leaving {
        return current;
    }
    let max = max_index(items.len(), page_size);
    if max == 0 {
        return 0;
    }
    *leaving = true;
    match direction {
        TurnDirection::Forward => {
            if current >= max {
                0
            } else {
                current + 1
            }
        }
        TurnDirection::Backward => {
            if current == 0 {
                max
            } else {
                (current - 1).min(max)
            }
        }
    }
}

/// Which way a page turn went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Forward,
    Backward,
}

/// A completed index change that still needs its slide animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTurn {
    pub from: usize,
    pub to: usize,
    pub direction: TurnDirection,
}

/// Page index plus the transition guard for one carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    leaving: bool,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            index: 0,
            leaving: false,
            page_size: page_size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True while a slide animation is in flight
    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    /// Turn to the next page, returning the turn if the index moved
    pub fn next<T>(&mut self, items: &[T]) -> Option<PageTurn> {
        self.apply(items, TurnDirection::Forward)
    }

    /// Turn to the previous page, returning the turn if the index moved
    pub fn prev<T>(&mut self, items: &[T]) -> Option<PageTurn> {
        self.apply(items, TurnDirection::Backward)
    }

    fn apply<T>(&mut self, items: &[T], direction: TurnDirection) -> Option<PageTurn> {
        let from = self.index;
        let to = turn(from, items, self.page_size, &mut self.leaving, direction);
        self.index = to;
        (self.leaving && to != from).then_some(PageTurn { from, to, direction })
    }

    /// Called when the exit animation completes
    pub fn finish_transition(&mut self) {
        self.leaving = false;
    }

    /// Back to the first page with no transition pending
    pub fn reset(&mut self) {
        self.index = 0;
        self.leaving = false;
    }

    /// Items on the current page
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window(items, self.index, self.page_size)
    }

    /// Items on an arbitrary page, used for the outgoing row of a slide
    pub fn window_at<'a, T>(&self, items: &'a [T], index: usize) -> &'a [T] {
        window(items, index, self.page_size)
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }
}
