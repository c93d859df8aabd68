//! Benchmarks for parsing and applying sort criteria.

use criterion::{criterion_group, criterion_main};
use sortable_core::{Criterion, Order, QueryAdapter};

const JOINED_DIRECTIVES: [&str; 2] = [
    "orders.customers.customer_id.name",
    "orders.customers.customer_id.created_at,desc",
];

#[derive(Default)]
struct CountingAdapter {
    joins: Vec<String>,
    sort_keys: usize,
}

impl QueryAdapter for CountingAdapter {
    fn has_join(&self, table: &str) -> bool {
        self.joins.iter().any(|t| t == table)
    }

    fn add_left_join(&mut self, table: &str, _left_column: &str, _right_column: &str) {
        self.joins.push(table.to_owned());
    }

    fn add_order_by(&mut self, _column: &str, _order: Order) {
        self.sort_keys += 1;
    }

    fn restrict_projection_to(&mut self, _pattern: &str) {}
}

fn criterion_benchmark(c: &mut criterion::Criterion) {
    c.bench_function("make_simple_criterion", |b| {
        b.iter(|| Criterion::make(" created_at,desc ", Order::Ascending))
    });
    c.bench_function("make_joined_criterion", |b| {
        let value = "orders.customers.customer_id.name.flip";
        b.iter(|| Criterion::make(value, Order::Ascending))
    });
    c.bench_function("apply_joined_criteria", |b| {
        let criteria = JOINED_DIRECTIVES
            .iter()
            .map(|value| value.parse::<Criterion>().unwrap())
            .collect::<Vec<_>>();
        b.iter(|| {
            let mut adapter = CountingAdapter::default();
            for criterion in &criteria {
                criterion.apply(&mut adapter);
            }
            adapter.sort_keys
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
