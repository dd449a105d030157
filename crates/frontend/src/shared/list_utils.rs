/// Shared list helpers: search, sort, client-side pagination and the search box.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Debounce delay of [`SearchInput`], ms.
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Types that can be matched against a free-text query
pub trait Searchable {
    /// `filter` is already trimmed and lower-cased.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring test used by `Searchable` impls.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps the items matching `filter`; a blank filter keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Pulls `page` back into range after the list shrank.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Slice of a 0-based `page`.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Each keystroke bumps the generation; only the latest one fires.
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Green Tea", qty: 3 },
            Row { name: "Coffee", qty: 10 },
            Row { name: "Black tea", qty: 1 },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(rows(), "  TEA ");
        assert_eq!(found.len(), 2);
        assert_eq!(filter_list(rows(), "").len(), 3);
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "qty", false);
        assert_eq!(items.iter().map(|r| r.qty).collect::<Vec<_>>(), vec![10, 3, 1]);
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Black tea");
    }

    #[test]
    fn test_pagination() {
        let items: Vec<i32> = (1..=23).collect();
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(paginate(&items, 2, 10), vec![21, 22, 23]);
        assert!(paginate(&items, 5, 10).is_empty());
        assert!(paginate(&items, 0, 0).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(4, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(2, 0), 0);
    }
}
