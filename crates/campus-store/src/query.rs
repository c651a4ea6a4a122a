//! Read-only, recomputed-on-demand views over an entity list.
//!
//! A `Query` borrows the records, so it can never observe a stale snapshot:
//! results are computed when [`Query::run`] is called and the list cannot be
//! mutated while the query is alive.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

type Filter<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;
type Comparator<'a, R> = Box<dyn Fn(&R, &R) -> Ordering + 'a>;

pub struct Query<'a, R> {
    records: &'a [R],
    filters: Vec<Filter<'a, R>>,
    sort: Option<Comparator<'a, R>>,
    limit: Option<usize>,
}

impl<'a, R> Query<'a, R> {
    #[must_use]
    pub fn new(records: &'a [R]) -> Self {
        Self {
            records,
            filters: Vec::new(),
            sort: None,
            limit: None,
        }
    }

    /// Keep records matching `predicate`. Multiple filters are ANDed.
    #[must_use]
    pub fn filter(mut self, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Order results by `cmp` (stable; ties keep canonical order).
    #[must_use]
    pub fn sort_by(mut self, cmp: impl Fn(&R, &R) -> Ordering + 'a) -> Self {
        self.sort = Some(Box::new(cmp));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate against the current records.
    #[must_use]
    pub fn run(&self) -> Vec<&'a R> {
        let mut out: Vec<&'a R> = self
            .records
            .iter()
            .filter(|r| self.filters.iter().all(|f| f(*r)))
            .collect();
        if let Some(cmp) = &self.sort {
            out.sort_by(|a, b| cmp(*a, *b));
        }
        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        out
    }

    /// Evaluate and clone the results.
    #[must_use]
    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.run().into_iter().cloned().collect()
    }
}

impl<'a, R: Serialize> Query<'a, R> {
    /// Keep records whose serialized `field` equals `value`.
    ///
    /// Strings compare case-insensitively; numbers, booleans, and enums
    /// compare by their text form. Array fields match if any element does.
    #[must_use]
    pub fn where_field(self, field: &'a str, value: &'a str) -> Self {
        self.filter(move |r| field_value(r, field).is_some_and(|v| value_matches(&v, value)))
    }

    /// Order by serialized `field`. Missing and null values sort last.
    #[must_use]
    pub fn order_by_field(self, field: &'a str, descending: bool) -> Self {
        self.sort_by(move |a, b| {
            let ord = compare_values(field_value(a, field), field_value(b, field));
            if descending { ord.reverse() } else { ord }
        })
    }
}

fn field_value<R: Serialize>(record: &R, field: &str) -> Option<Value> {
    match serde_json::to_value(record).ok()? {
        Value::Object(mut map) => map.remove(field).filter(|v| !v.is_null()),
        _ => None,
    }
}

fn value_matches(actual: &Value, expected: &str) -> bool {
    match actual {
        Value::String(s) => s.eq_ignore_ascii_case(expected),
        Value::Array(items) => items.iter().any(|item| value_matches(item, expected)),
        Value::Number(n) => match (n.as_f64(), expected.parse::<f64>()) {
            (Some(a), Ok(b)) => (a - b).abs() < f64::EPSILON,
            _ => n.to_string() == expected,
        },
        other => other.to_string() == expected,
    }
}

fn compare_values(a: Option<Value>, b: Option<Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
