//! Result sorting for query execution
//!
//! Every ordering is a stable sort, so products that compare equal keep
//! their catalog order.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::planner::SortKey;

/// Sorts matched products
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts products in place according to the sort key
    pub fn sort(products: &mut [&Product], key: SortKey) {
        products.sort_by(|a, b| Self::compare(a, b, key));
    }

    /// Comparator for a single sort key
    pub fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
        match key {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceLow => compare_prices(a.price, b.price, false),
            SortKey::PriceHigh => compare_prices(a.price, b.price, true),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Popularity => b
                .is_best_seller
                .cmp(&a.is_best_seller)
                .then_with(|| b.is_popular.cmp(&a.is_popular))
                .then_with(|| b.reviews.cmp(&a.reviews)),
            SortKey::Newest => b.id.cmp(&a.id),
            SortKey::Size => a.size_magnitude().cmp(&b.size_magnitude()),
        }
    }
}

/// Case-insensitive ordering with a case-sensitive tiebreak, so "apple"
/// and "Apple" sit together but still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Products without a price go last in both directions
fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: &str, name: &str) -> Product {
        Product::new(id, name)
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let a = make_product("1", "charlie");
        let b = make_product("2", "Alice");
        let c = make_product("3", "bob");
        let mut products = vec![&a, &b, &c];

        ResultSorter::sort(&mut products, SortKey::Name);

        assert_eq!(ids(&products), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_price_missing_last() {
        let mut a = make_product("a", "A");
        let mut b = make_product("b", "B");
        let c = make_product("c", "C");
        a.price = Some(300.0);
        b.price = Some(150.0);

        let mut low = vec![&c, &a, &b];
        ResultSorter::sort(&mut low, SortKey::PriceLow);
        assert_eq!(ids(&low), vec!["b", "a", "c"]);

        let mut high = vec![&c, &b, &a];
        ResultSorter::sort(&mut high, SortKey::PriceHigh);
        assert_eq!(ids(&high), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_rating_stable() {
        let mut a = make_product("a", "A");
        let mut b = make_product("b", "B");
        let mut c = make_product("c", "C");
        a.rating = 4.5;
        b.rating = 4.9;
        c.rating = 4.9;
        let mut products = vec![&a, &b, &c];

        ResultSorter::sort(&mut products, SortKey::Rating);

        // b and c tie, input order preserved
        assert_eq!(ids(&products), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_popularity() {
        let mut best = make_product("best", "Best");
        let mut popular = make_product("popular", "Popular");
        let mut plain_many = make_product("many", "Many reviews");
        let mut plain_few = make_product("few", "Few reviews");
        best.is_best_seller = true;
        best.reviews = 1;
        popular.is_popular = true;
        popular.reviews = 5;
        plain_many.reviews = 500;
        plain_few.reviews = 10;

        let mut products = vec![&plain_few, &popular, &plain_many, &best];
        ResultSorter::sort(&mut products, SortKey::Popularity);

        assert_eq!(ids(&products), vec!["best", "popular", "many", "few"]);
    }

    #[test]
    fn test_sort_by_newest_descending_id() {
        let a = make_product("ff-a", "A");
        let b = make_product("ff-c", "C");
        let c = make_product("ff-b", "B");
        let mut products = vec![&a, &b, &c];

        ResultSorter::sort(&mut products, SortKey::Newest);

        assert_eq!(ids(&products), vec!["ff-c", "ff-b", "ff-a"]);
    }

    #[test]
    fn test_sort_by_size_magnitude() {
        let sizes = ["300ml", "3 Pieces", "1200ml", "800ml", "Large"];
        let products: Vec<Product> = sizes
            .iter()
            .map(|s| {
                let mut p = make_product(s, s);
                p.size = s.to_string();
                p
            })
            .collect();
        let mut refs: Vec<&Product> = products.iter().collect();

        ResultSorter::sort(&mut refs, SortKey::Size);

        assert_eq!(ids(&refs), vec!["Large", "3 Pieces", "300ml", "800ml", "1200ml"]);
    }
}
