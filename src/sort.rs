//! In-place comparison sorts over `&mut [T]`. None of them promise
//! stability.

/// Grow a sorted prefix one element at a time, swap-walking each new
/// element left until it stops sinking.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for border in 1..items.len() {
        let mut at = border;
        while at > 0 && items[at - 1] > items[at] {
            items.swap(at - 1, at);
            at -= 1;
        }
    }
}

/// Scan the unsorted suffix for its least element and swap it onto the
/// border.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for border in 0..items.len().saturating_sub(1) {
        let mut least = border;
        for at in border + 1..items.len() {
            if items[at] < items[least] {
                least = at;
            }
        }
        items.swap(border, least);
    }
}

/// First-element pivot, two cursors closing in from both ends of the span.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if !items.is_empty() {
        sort_span(items, 0, items.len() - 1);
    }
}

fn sort_span<T: Ord>(items: &mut [T], lower: usize, upper: usize) {
    if lower < upper {
        let pivot = partition(items, lower, upper);
        if pivot > 0 {
            sort_span(items, lower, pivot - 1);
        }
        sort_span(items, pivot + 1, upper);
    }
}

/// Everything at most the pivot ends up left of it. The forward cursor is
/// fenced at `upper`; the backward one needs no fence, it cannot pass the
/// pivot slot itself.
fn partition<T: Ord>(items: &mut [T], lower: usize, upper: usize) -> usize {
    let pivot = lower;
    let mut start = lower;
    let mut end = upper;
    while start < end {
        while start < upper && items[start] <= items[pivot] {
            start += 1;
        }
        while items[end] > items[pivot] {
            end -= 1;
        }
        if start < end {
            items.swap(start, end);
        }
    }
    items.swap(pivot, end);
    end
}
