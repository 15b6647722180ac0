//! Natural ordering cases taken from how table columns are actually filled:
//! file names, versions, dates, series numbers and mixed cells.

use natsort::natural::{
    compare, compare_desc, sign, sort, sort_by_natural_key, Direction, NaturalKey, SortType,
    SortTypeRegistry, Value,
};
use rstest::rstest;
use std::cmp::Ordering::{self, *};

#[rstest]
#[case("file9", "file10", Less)]
#[case("v1.2", "v1.10", Less)]
#[case("2020-01-01", "2021-01-01", Less)]
#[case("Apple", "apple", Equal)]
#[case("", "abc", Less)]
#[case("Book 2 of 10", "Book 10 of 10", Less)]
#[case("x-2", "x-10", Greater)]
#[case("item 007", "item 7", Equal)]
#[case("1.5", "1.25", Less)]
#[case("a", "a0", Less)]
#[case("10", "9.99", Greater)]
#[case("12/31/2019", "01/01/2020", Less)]
#[case("1 Jul 2003", "30 Jun 2003", Greater)]
#[case("chapter one", "chapter two", Less)]
fn ascending_order(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
    assert_eq!(compare(a, b), expected, "{a:?} vs {b:?}");
    assert_eq!(compare(b, a), expected.reverse(), "{b:?} vs {a:?}");
    assert_eq!(compare_desc(a, b), expected.reverse());
}

#[test]
fn missing_value_is_empty_text() {
    assert_eq!(compare(None::<&str>, "abc"), Less);
    assert_eq!(compare(None::<&str>, None::<&str>), Equal);
    assert_eq!(sign(compare(Value::Missing, "")), 0);
}

#[test]
fn sorts_a_series_column() {
    let mut titles = vec![
        "Discworld 10",
        "discworld 2",
        "Discworld 1",
        "Discworld 1.5",
        "Discworld",
    ];
    sort(&mut titles);
    assert_eq!(
        titles,
        vec![
            "Discworld",
            "Discworld 1",
            "Discworld 1.5",
            "discworld 2",
            "Discworld 10",
        ]
    );
}

#[test]
fn sorts_dates_chronologically() {
    let mut dates = vec!["Mar 3, 2019", "2018-12-25", "01/15/2019", "2019-02-01"];
    sort(&mut dates);
    assert_eq!(
        dates,
        vec!["2018-12-25", "01/15/2019", "2019-02-01", "Mar 3, 2019"]
    );
}

#[test]
fn key_order_matches_comparator() {
    let values = ["a10", "A2", "", "2020-01-01", "v1.10", "-5", "x.y", "2019-06-30"];
    for a in values {
        for b in values {
            let keys = NaturalKey::new(a).cmp_natural(&NaturalKey::new(b));
            assert_eq!(keys, compare(a, b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn registry_sorts_descending_column() {
    let registry = SortTypeRegistry::with_defaults();
    let sort_type = registry.lookup("natural", Direction::Descending).unwrap();

    let column = ["track 3", "track 12", "track 1"];
    let values: Vec<Value> = column.iter().map(|c| Value::from(*c)).collect();
    let cells: Vec<&str> = sort_type
        .sort_order(&values)
        .into_iter()
        .map(|i| column[i])
        .collect();
    assert_eq!(cells, vec!["track 12", "track 3", "track 1"]);

    let mut same = cells.clone();
    sort_by_natural_key(&mut same, Direction::Descending, |c| NaturalKey::new(*c));
    assert_eq!(same, cells);
}

#[test]
fn sorts_mixed_date_column_without_panicking() {
    let months = ["jan", "feb", "mar", "oct", "dec"];
    let mut column = Vec::new();
    for i in 0..2000 {
        column.push(match i % 4 {
            0 => format!("{} {}, {}", months[i % 5], i % 27 + 1, 2000 + i % 23),
            1 => format!("{}-{:02}-{:02}", 2024 - i % 31, i % 12 + 1, i % 28 + 1),
            2 => ["g", "b", "z", "n"][i % 3].to_string(),
            _ => format!("{} {}, {}", months[(i + 2) % 5], i % 9 + 1, 2019 - i % 7),
        });
    }
    let registry = SortTypeRegistry::with_defaults();
    for direction in [Direction::Ascending, Direction::Descending] {
        let sort_type = registry.lookup("natural", direction).unwrap();
        let values: Vec<Value> = column.iter().map(Value::from).collect();
        let mut order = sort_type.sort_order(&values);
        order.sort_unstable();
        assert_eq!(order, (0..column.len()).collect::<Vec<_>>());
    }

    let mut sorted = column.clone();
    sort(&mut sorted);
    assert_eq!(sorted.len(), column.len());
}
