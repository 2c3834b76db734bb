//! Inventory Table Helpers
//!
//! Category options, search filtering and column sorting for the item table.

use std::cmp::Ordering;

use crate::models::Item;

pub const ALL_CATEGORIES: &str = "All";

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Stock,
    Price,
    Sku,
}

impl SortKey {
    /// Table columns in display order
    pub const COLUMNS: [SortKey; 5] = [SortKey::Name, SortKey::Category, SortKey::Stock, SortKey::Price, SortKey::Sku];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Product Name",
            SortKey::Category => "Category",
            SortKey::Stock => "Stock",
            SortKey::Price => "Price",
            SortKey::Sku => "SKU",
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Stock => a.stock.cmp(&b.stock),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Sku => a.sku.cmp(&b.sku),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Current column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: SortKey::Name, direction: Direction::Asc }
    }
}

impl SortState {
    /// Clicking the active column flips it; any other column starts ascending
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == Direction::Asc {
            Direction::Desc
        } else {
            Direction::Asc
        };
        Self { key, direction }
    }

    /// Arrow shown next to a column header
    pub fn arrow(&self, key: SortKey) -> &'static str {
        match (self.key == key, self.direction) {
            (false, _) => "",
            (true, Direction::Asc) => "↑",
            (true, Direction::Desc) => "↓",
        }
    }
}

/// Table filter inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    pub search: String,
    pub category: String,
}

impl Default for TableFilter {
    fn default() -> Self {
        Self { search: String::new(), category: ALL_CATEGORIES.to_string() }
    }
}

impl TableFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if self.category != ALL_CATEGORIES && item.category_name() != self.category {
            return false;
        }
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [item.name.as_str(), item.sku.as_str(), item.category_name()]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// "All" followed by each distinct category in first-seen order
pub fn category_options(items: &[Item]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for category in items.iter().filter_map(|i| i.category.as_deref()) {
        if !category.is_empty() && !options.iter().any(|o| o == category) {
            options.push(category.to_string());
        }
    }
    options
}

/// Filter then sort; the sort is stable
pub fn visible_items(items: &[Item], filter: &TableFilter, sort: SortState) -> Vec<Item> {
    let mut rows: Vec<Item> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    rows.sort_by(|a, b| {
        let ord = sort.key.compare(a, b);
        match sort.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
    rows
}

pub fn showing_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} items", shown, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, name: &str, sku: &str, category: Option<&str>, stock: i64, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.map(str::to_string),
            price,
            stock,
            min_stock_level: 5,
            location: None,
            supplier: None,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "Office Chair", "CH-100", Some("Furniture"), 12, 45000.0),
            make_item(2, "Laptop", "LP-200", Some("Electronics"), 3, 350000.0),
            make_item(3, "Desk", "DK-300", Some("Furniture"), 7, 90000.0),
            make_item(4, "Rice 25kg", "RC-400", Some("Food"), 40, 17500.0),
            make_item(5, "Mystery Box", "MB-500", None, 1, 1000.0),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_category_options_first_seen_order() {
        assert_eq!(category_options(&sample()), vec!["All", "Furniture", "Electronics", "Food"]);
        assert_eq!(category_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_by_category() {
        let filter = TableFilter { search: String::new(), category: "Furniture".into() };
        let rows = visible_items(&sample(), &filter, SortState::default());
        assert_eq!(ids(&rows), vec![3, 1]);
    }

    #[test]
    fn test_search_matches_name_sku_or_category() {
        let items = sample();
        let by_name = TableFilter { search: "LAPTOP".into(), ..TableFilter::default() };
        assert_eq!(ids(&visible_items(&items, &by_name, SortState::default())), vec![2]);

        let by_sku = TableFilter { search: "rc-4".into(), ..TableFilter::default() };
        assert_eq!(ids(&visible_items(&items, &by_sku, SortState::default())), vec![4]);

        let by_category = TableFilter { search: "electro".into(), ..TableFilter::default() };
        assert_eq!(ids(&visible_items(&items, &by_category, SortState::default())), vec![2]);

        let nothing = TableFilter { search: "zzz".into(), ..TableFilter::default() };
        assert!(visible_items(&items, &nothing, SortState::default()).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let filter = TableFilter { search: "desk".into(), category: "Electronics".into() };
        assert!(visible_items(&sample(), &filter, SortState::default()).is_empty());
    }

    #[test]
    fn test_sort_by_numeric_columns() {
        let items = sample();
        let by_stock = SortState { key: SortKey::Stock, direction: Direction::Asc };
        assert_eq!(ids(&visible_items(&items, &TableFilter::default(), by_stock)), vec![5, 2, 3, 1, 4]);

        let by_price_desc = SortState { key: SortKey::Price, direction: Direction::Desc };
        assert_eq!(ids(&visible_items(&items, &TableFilter::default(), by_price_desc)), vec![2, 3, 1, 4, 5]);
    }

    #[test]
    fn test_sort_by_category_puts_missing_first() {
        let by_category = SortState { key: SortKey::Category, direction: Direction::Asc };
        let rows = visible_items(&sample(), &TableFilter::default(), by_category);
        // Stable: the two Furniture rows keep their input order
        assert_eq!(ids(&rows), vec![5, 2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_toggle() {
        let state = SortState::default();
        let flipped = state.toggled(SortKey::Name);
        assert_eq!(flipped.direction, Direction::Desc);
        assert_eq!(flipped.toggled(SortKey::Name).direction, Direction::Asc);

        let other = flipped.toggled(SortKey::Price);
        assert_eq!(other, SortState { key: SortKey::Price, direction: Direction::Asc });
    }

    #[test]
    fn test_sort_arrow() {
        let state = SortState { key: SortKey::Stock, direction: Direction::Desc };
        assert_eq!(state.arrow(SortKey::Stock), "↓");
        assert_eq!(state.arrow(SortKey::Name), "");
        assert_eq!(SortState::default().arrow(SortKey::Name), "↑");
    }

    #[test]
    fn test_showing_summary() {
        assert_eq!(showing_summary(2, 5), "Showing 2 of 5 items");
    }
}
