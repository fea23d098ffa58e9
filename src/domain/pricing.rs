use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::errors::DomainError;
use super::menu_item::MenuItem;
use super::order::{Order, PricedOrder};
use super::ports::{parse_id, Collection, DocumentStore, Filter};

/// Prices an order against the menu.
///
/// A caller-supplied total is trusted as-is and no lookup happens. Otherwise
/// every referenced menu item is resolved in one batched read and the total
/// is `sum(price * quantity)` rounded to cents. Any malformed or unknown
/// menu item id rejects the whole order.
pub fn price_order<S>(store: &S, order: Order) -> Result<PricedOrder, DomainError>
where
    S: DocumentStore + ?Sized,
{
    if let Some(total) = order.total {
        return Ok(order.with_total(total));
    }

    // Parse every reference before touching the store.
    let refs = order
        .items
        .iter()
        .map(|item| parse_id(&item.menu_item_id))
        .collect::<Result<Vec<Uuid>, _>>()?;

    let prices = resolve_prices(store, &refs)?;

    let mut total = 0.0;
    for (item, id) in order.items.iter().zip(&refs) {
        let Some(price) = prices.get(id) else {
            return Err(DomainError::ReferenceNotFound(item.menu_item_id.clone()));
        };
        total += price * f64::from(item.quantity);
    }

    if !total.is_finite() {
        return Err(DomainError::InvalidInput(
            "order total is too large to represent".to_string(),
        ));
    }

    Ok(order.with_total(round_to_cents(total)))
}

fn resolve_prices<S>(store: &S, refs: &[Uuid]) -> Result<HashMap<Uuid, f64>, DomainError>
where
    S: DocumentStore + ?Sized,
{
    if refs.is_empty() {
        return Ok(HashMap::new());
    }

    let distinct: HashSet<Uuid> = refs.iter().copied().collect();
    let docs = store.find_many(
        Collection::MenuItem,
        &Filter::IdIn(distinct.into_iter().collect()),
        None,
    )?;

    docs.into_iter()
        .map(|doc| {
            let item: MenuItem = serde_json::from_value(doc.body).map_err(|e| {
                DomainError::Internal(format!("menu item {} is not decodable: {}", doc.id, e))
            })?;
            Ok((doc.id, item.price))
        })
        .collect()
}

/// Rounds to two decimals on the exact binary value of `amount`, ties to even.
pub fn round_to_cents(amount: f64) -> f64 {
    format!("{:.2}", amount).parse().unwrap_or(amount)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use bigdecimal::BigDecimal;
    use serde_json::json;

    use super::*;
    use crate::domain::order::OrderItem;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn add_menu_item(store: &InMemoryDocumentStore, price: f64) -> String {
        store
            .insert_one(
                Collection::MenuItem,
                json!({
                    "restaurant_id": "r-1",
                    "name": "dish",
                    "description": null,
                    "price": price,
                    "image": null,
                    "vegetarian": false,
                    "spicy": false
                }),
            )
            .expect("insert failed")
            .to_string()
    }

    fn order(items: &[(&str, i32)], total: Option<f64>) -> Order {
        Order {
            customer_name: "Ada".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            restaurant_id: "r-1".to_string(),
            items: items
                .iter()
                .map(|(id, quantity)| OrderItem {
                    menu_item_id: id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
            notes: Some("ring twice".to_string()),
            total,
        }
    }

    #[test]
    fn supplied_total_is_passed_through_without_lookup() {
        let store = InMemoryDocumentStore::new();
        let priced = price_order(&store, order(&[("not-even-an-id", 4)], Some(99.999)))
            .expect("pricing failed");

        assert_eq!(priced.total, 99.999);
        assert_eq!(priced.items[0].menu_item_id, "not-even-an-id");
        assert_eq!(priced.notes.as_deref(), Some("ring twice"));
        assert_eq!(store.find_calls(), 0);
    }

    #[test]
    fn computes_sum_of_price_times_quantity() {
        let store = InMemoryDocumentStore::new();
        let a = add_menu_item(&store, 10.00);
        let b = add_menu_item(&store, 5.50);

        let priced = price_order(&store, order(&[(&a, 2), (&b, 1)], None)).unwrap();

        assert_eq!(priced.total, 25.50);
        assert_eq!(store.find_calls(), 1);
    }

    #[test]
    fn duplicate_references_are_priced_independently() {
        let store = InMemoryDocumentStore::new();
        let a = add_menu_item(&store, 3.33);

        let priced = price_order(&store, order(&[(&a, 1), (&a, 1)], None)).unwrap();

        assert_eq!(priced.total, 6.66);
        assert_eq!(priced.items.len(), 2);
    }

    #[test]
    fn empty_order_costs_nothing() {
        let store = InMemoryDocumentStore::new();

        let priced = price_order(&store, order(&[], None)).unwrap();

        assert_eq!(priced.total, 0.0);
    }

    #[test]
    fn unknown_menu_item_is_reported_by_id() {
        let store = InMemoryDocumentStore::new();
        let a = add_menu_item(&store, 1.0);
        let missing = Uuid::new_v4().to_string();

        let err = price_order(&store, order(&[(&a, 1), (&missing, 2)], None)).unwrap_err();

        match err {
            DomainError::ReferenceNotFound(id) => assert_eq!(id, missing),
            other => panic!("expected ReferenceNotFound, got {other:?}"),
        }
        assert_eq!(store.insert_calls(), 1);
    }

    #[test]
    fn malformed_reference_fails_before_any_store_call() {
        let store = InMemoryDocumentStore::new();
        let valid = Uuid::new_v4().to_string();

        for bad in ["", "abc", "65a1f2c3d4e5f6a7b8c9d0e1"] {
            let err = price_order(&store, order(&[(&valid, 1), (bad, 1)], None)).unwrap_err();
            assert!(matches!(err, DomainError::MalformedReference(ref s) if s == bad));
        }
        assert_eq!(store.find_calls(), 0);
    }

    #[test]
    fn batched_lookup_is_shared_through_arc() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let a = add_menu_item(&store, 2.25);
        let b = add_menu_item(&store, 1.00);

        let priced = price_order(&store, order(&[(&a, 4), (&b, 3), (&a, 1)], None)).unwrap();

        assert_eq!(priced.total, 14.25);
        assert_eq!(store.find_calls(), 1);
    }

    #[test]
    fn total_matches_decimal_reference() {
        let cases: &[&[(&str, i32)]] = &[
            &[("0.10", 1), ("0.20", 1), ("0.30", 1)],
            &[("19.99", 3), ("0.01", 7)],
            &[("1.15", 3)],
            &[("9.99", 10), ("0.33", 3)],
            &[("12.49", 1), ("7.31", 2), ("0.07", 9)],
            &[("17.325", 1)],
            &[("0.125", 1)],
        ];

        for case in cases {
            let store = InMemoryDocumentStore::new();
            let mut items = Vec::new();
            let mut reference = BigDecimal::from(0);
            for (price, quantity) in *case {
                let id = add_menu_item(&store, price.parse().unwrap());
                items.push((id, *quantity));
                reference += BigDecimal::from_str(price).unwrap() * BigDecimal::from(*quantity);
            }
            let borrowed: Vec<(&str, i32)> =
                items.iter().map(|(id, q)| (id.as_str(), *q)).collect();

            let priced = price_order(&store, order(&borrowed, None)).unwrap();

            let expected: f64 = reference.round(2).to_string().parse().unwrap();
            assert_eq!(priced.total, expected, "case {case:?}");
        }
    }

    #[test]
    fn round_to_cents_drops_float_noise() {
        assert_eq!(round_to_cents(0.1 + 0.2 + 0.3), 0.6);
        assert_eq!(round_to_cents(3.4499999999999997), 3.45);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn round_to_cents_uses_the_exact_binary_value() {
        // 17.325 and 211.635 are stored just below the half cent.
        assert_eq!(round_to_cents(17.325), 17.32);
        assert_eq!(round_to_cents(211.635), 211.63);
        // 0.125 is an exact tie and goes to the even cent.
        assert_eq!(round_to_cents(0.125), 0.12);
    }

    #[test]
    fn sub_cent_prices_round_like_the_stored_value() {
        let store = InMemoryDocumentStore::new();
        let a = add_menu_item(&store, 211.635);

        let priced = price_order(&store, order(&[(&a, 1)], None)).unwrap();

        assert_eq!(priced.total, 211.63);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let store = InMemoryDocumentStore::new();
        let a = add_menu_item(&store, 1e308);

        let err = price_order(&store, order(&[(&a, 2)], None)).unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
