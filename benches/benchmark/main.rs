use criterion::criterion_main;

mod common;
mod core;
mod scaling;


#[cfg(all(feature = "std", feature = "async"))]
mod async_ops;

#[cfg(all(feature = "std", feature = "async"))]
criterion_main!(
    core::core_benches,
    scaling::scaling_benches,
    attempt::attempt_benches,
    async_ops::async_ops_benches,
);

#[cfg(all(feature = "std", not(feature = "async")))]
criterion_main!(core::core_benches, scaling::scaling_benches, attempt::attempt_benches);

#[cfg(not(feature = "std"))]
criterion_main!(core::core_benches, scaling::scaling_benches);
