use criterion::Criterion;
use reason_rail::{ErrorReason, Outcome, ValueOutcome};
use std::time::Duration;

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Order {
    pub id: u64,
    pub amount_cents: u64,
    pub items: u32,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self { id, amount_cents: 1_000 + id * 37 % 9_000, items: (id % 7) as u32 + 1 }
    }
}

pub fn load_order(id: u64) -> ValueOutcome<Order> {
    if id % 10 == 0 {
        return ValueOutcome::fail(
            ErrorReason::new("order not found").with_metadata("order_id", id),
        );
    }
    ValueOutcome::ok(Order::new(id)).with_success("order loaded")
}

pub fn validate_order(order: &Order) -> Outcome {
    if order.amount_cents > 9_500 {
        return Outcome::fail(
            ErrorReason::new("amount over limit").with_metadata("amount", order.amount_cents),
        );
    }
    Outcome::ok().with_success("order validated")
}

pub fn price_order(order: Order) -> ValueOutcome<u64> {
    ValueOutcome::ok(order.amount_cents * u64::from(order.items)).with_success("order priced")
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
