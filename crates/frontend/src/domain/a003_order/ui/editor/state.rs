//! Staged line-item table for the order editor.
//!
//! An explicit, DOM-free state object: every user intent is a method here
//! and the view renders from [`TableSnapshot`] alone. Rows are kept in
//! insertion order; sorting and page windowing happen only when a snapshot
//! is taken.

use contracts::domain::a001_item::Item;
use contracts::domain::a003_order::OrderLine;
use std::collections::HashSet;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Price,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            ascending: true,
        }
    }
}

/// Render-ready view of the table. The page window is already applied;
/// `total_rows`/`total_pages` describe the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub rows: Vec<OrderLine>,
    pub selected: HashSet<i32>,
    pub selected_count: usize,
    pub all_selected: bool,
    pub sort: SortSpec,
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
pub struct LineItemTable {
    rows: Vec<OrderLine>,
    selected: HashSet<i32>,
    sort: SortSpec,
    page: usize,
    page_size: usize,
}

impl Default for LineItemTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selected: HashSet::new(),
            sort: SortSpec::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LineItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new line with quantity 1. Adding the same item twice
    /// stages two separate lines; no quantity merge.
    pub fn add_line(&mut self, item: &Item) {
        self.rows.push(OrderLine::from_item(item));
    }

    /// Symmetric-difference update of the selection with `{id}`. Lines
    /// staged from the same item share an id and toggle together.
    pub fn toggle_select(&mut self, id: i32) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|row| row.id.value()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Removes every line whose id is selected and clears the selection.
    /// No selection means no-op. Irreversible; the caller gates this
    /// behind a confirmation step.
    pub fn remove_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.rows
            .retain(|row| !self.selected.contains(&row.id.value()));
        self.selected.clear();
    }

    /// Clicking the active column flips direction; a different column
    /// becomes active, ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort.column == column {
            self.sort.ascending = !self.sort.ascending;
        } else {
            self.sort = SortSpec {
                column,
                ascending: true,
            };
        }
    }

    /// An out-of-range page is allowed and shows an empty window.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the window size moves back to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page = 0;
    }

    /// Full collection in insertion order, before any sort.
    pub fn rows(&self) -> &[OrderLine] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    fn all_selected(&self) -> bool {
        !self.rows.is_empty()
            && self
                .rows
                .iter()
                .all(|row| self.selected.contains(&row.id.value()))
    }

    /// Whole collection sorted by the active spec. `Vec::sort_by` is
    /// stable, so equal keys keep insertion order in both directions.
    fn sorted_rows(&self) -> Vec<OrderLine> {
        let mut rows = self.rows.clone();
        let SortSpec { column, ascending } = self.sort;
        rows.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Name => a.name.cmp(&b.name),
                SortColumn::Price => a.price.total_cmp(&b.price),
                SortColumn::Quantity => a.quantity.cmp(&b.quantity),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        rows
    }

    /// Sorted collection sliced to `[page*page_size, page*page_size + page_size)`.
    pub fn visible_rows(&self) -> Vec<OrderLine> {
        self.sorted_rows()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            rows: self.visible_rows(),
            selected: self.selected.clone(),
            selected_count: self.selected.len(),
            all_selected: self.all_selected(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
            total_rows: self.rows.len(),
            total_pages: self.total_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_item::ItemId;

    fn item(id: i32, name: &str, price: f64) -> Item {
        Item {
            id: ItemId(id),
            name: name.to_string(),
            price,
        }
    }

    fn table_with(items: &[Item]) -> LineItemTable {
        let mut table = LineItemTable::new();
        for item in items {
            table.add_line(item);
        }
        table
    }

    #[test]
    fn test_add_line_appends_without_dedup() {
        let coffee = item(1, "Coffee", 9.5);
        let mut table = LineItemTable::new();
        table.add_line(&coffee);
        table.add_line(&coffee);
        table.add_line(&item(2, "Tea", 4.0));

        assert_eq!(table.len(), 3);
        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Coffee", "Tea"]);
        assert!(table.rows().iter().all(|r| r.quantity == 1));
    }

    #[test]
    fn test_select_all_then_remove_empties_everything() {
        let mut table = table_with(&[item(1, "Coffee", 9.5), item(2, "Tea", 4.0)]);
        table.select_all(true);
        assert_eq!(table.selected_count(), 2);

        table.remove_selected();
        assert!(table.is_empty());
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_is_an_involution() {
        let mut table = table_with(&[item(1, "Coffee", 9.5), item(2, "Tea", 4.0)]);
        table.toggle_select(1);
        assert!(table.is_selected(1));

        table.toggle_select(2);
        table.toggle_select(2);
        assert!(table.is_selected(1));
        assert!(!table.is_selected(2));
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn test_remove_with_no_selection_is_a_noop() {
        let mut table = table_with(&[item(1, "Coffee", 9.5)]);
        table.remove_selected();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_lines_remove_together() {
        let coffee = item(1, "Coffee", 9.5);
        let mut table = LineItemTable::new();
        table.add_line(&coffee);
        table.add_line(&coffee);
        table.add_line(&item(2, "Tea", 4.0));

        table.toggle_select(1);
        table.remove_selected();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].name, "Tea");
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let mut table = table_with(&[
            item(1, "Banana", 1.0),
            item(2, "Apple", 2.0),
            item(3, "Cherry", 3.0),
        ]);

        // Default sort is name ascending.
        let names: Vec<String> = table.visible_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Apple", "Banana", "Cherry"]);

        table.toggle_sort(SortColumn::Name);
        let names: Vec<String> = table.visible_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Cherry", "Banana", "Apple"]);
    }

    #[test]
    fn test_new_sort_column_starts_ascending() {
        let mut table = table_with(&[item(1, "Banana", 3.0), item(2, "Apple", 1.0)]);
        table.toggle_sort(SortColumn::Name); // name descending

        table.toggle_sort(SortColumn::Price);
        assert_eq!(
            table.sort(),
            SortSpec {
                column: SortColumn::Price,
                ascending: true
            }
        );
        let prices: Vec<f64> = table.visible_rows().into_iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![1.0, 3.0]);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut table = table_with(&[
            item(1, "Coffee", 5.0),
            item(2, "Coffee", 5.0),
            item(3, "Coffee", 5.0),
        ]);

        let ids: Vec<i32> = table
            .visible_rows()
            .into_iter()
            .map(|r| r.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Stable in the descending direction too.
        table.toggle_sort(SortColumn::Name);
        let ids: Vec<i32> = table
            .visible_rows()
            .into_iter()
            .map(|r| r.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_windows() {
        let items: Vec<Item> = (1..=14)
            .map(|i| item(i, &format!("Item {:02}", i), f64::from(i)))
            .collect();
        let mut table = table_with(&items);

        table.set_page_size(14);
        assert_eq!(table.visible_rows().len(), 14);
        assert_eq!(table.total_pages(), 1);

        table.set_page_size(6);
        assert_eq!(table.total_pages(), 3);
        table.set_page(2);
        let window = table.visible_rows();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].name, "Item 13");
        assert_eq!(window[1].name, "Item 14");
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_clamped() {
        let mut table = table_with(&[item(1, "Coffee", 9.5)]);
        table.set_page(7);
        assert!(table.visible_rows().is_empty());
        assert_eq!(table.page(), 7);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let items: Vec<Item> = (1..=12)
            .map(|i| item(i, &format!("Item {:02}", i), 1.0))
            .collect();
        let mut table = table_with(&items);
        table.set_page(2);

        table.set_page_size(10);
        assert_eq!(table.page(), 0);
    }

    #[test]
    fn test_selection_survives_resort_and_repage() {
        let mut table = table_with(&[
            item(1, "Banana", 1.0),
            item(2, "Apple", 2.0),
            item(3, "Cherry", 3.0),
        ]);
        table.toggle_select(2);

        table.toggle_sort(SortColumn::Name);
        table.set_page(1);
        assert!(table.is_selected(2));
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn test_snapshot_reflects_window_and_totals() {
        let items: Vec<Item> = (1..=7)
            .map(|i| item(i, &format!("Item {:02}", i), 1.0))
            .collect();
        let mut table = table_with(&items);
        table.select_all(true);
        table.set_page(1);

        let snapshot = table.snapshot();
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.total_rows, 7);
        assert_eq!(snapshot.total_pages, 2);
        assert_eq!(snapshot.selected_count, 7);
        assert!(snapshot.all_selected);
        assert_eq!(snapshot.page, 1);
    }

    #[test]
    fn test_empty_table_snapshot() {
        let snapshot = LineItemTable::new().snapshot();
        assert!(snapshot.rows.is_empty());
        assert!(!snapshot.all_selected);
        assert_eq!(snapshot.total_pages, 1);
    }
}
