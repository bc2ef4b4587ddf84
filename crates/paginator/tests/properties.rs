use paginator::{paginate, BaseUrl};
use proptest::prelude::*;

fn expected_last_page(total: i64, per_page: i64) -> i64 {
    std::cmp::max((total + per_page - 1) / per_page, 1)
}

proptest! {
    #[test]
    fn result_invariants(total in 0i64..5_000, per_page in 1i64..120, current in 1i64..200) {
        let r = paginate(current, per_page, total, "http://example.com/items?sort=name&page=77").unwrap();
        let last = expected_last_page(total, per_page);
        prop_assert_eq!(r.last_page(), last);

        prop_assert!(r.showing_range.end <= total);
        prop_assert_eq!(r.showing_range.start, r.showing_range.end - per_page + 1);

        let orders: Vec<i64> = r.pages.iter().map(|p| p.order).collect();
        prop_assert!(orders.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(orders.first().copied(), Some(1));
        prop_assert_eq!(orders.last().copied(), Some(last));

        prop_assert_eq!(r.prev.is_some(), current > 1);
        prop_assert_eq!(r.next.is_some(), current < last);

        for link in r.pages.iter().chain(r.prev.iter()).chain(r.next.iter()) {
            let base = BaseUrl::parse(&link.url).unwrap();
            prop_assert_eq!(base.query_value("page"), Some(link.order.to_string()));
            let sort = base.query_value("sort");
            prop_assert_eq!(sort.as_deref(), Some("name"));
            prop_assert_eq!(link.is_current, link.order == current);
        }
    }
}
