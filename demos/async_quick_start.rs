use std::time::Duration;

use reason_rail::prelude_async::*;

async fn fetch_quota(tenant: u32) -> ValueOutcome<u32> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    if tenant == 0 {
        return ValueOutcome::fail(ErrorReason::new("unknown tenant").with_metadata("tenant", tenant));
    }
    ValueOutcome::ok(tenant * 10).with_success("quota fetched")
}

async fn reserve(quota: u32, wanted: u32) -> ValueOutcome<u32> {
    ValueOutcome::attempt_outcome_async(async move {
        ensure!(wanted <= quota, "wanted {} exceeds quota {}", wanted, quota)
            .bind(|| ValueOutcome::ok(quota - wanted))
            .with_success("seats reserved")
    })
    .await
}

#[tokio::main]
async fn main() {
    for (tenant, wanted) in [(3, 5), (3, 50), (0, 1)] {
        let outcome = Outcome::ok()
            .bind_async(|| fetch_quota(tenant))
            .await
            .bind_async(|quota| reserve(quota, wanted))
            .await
            .on_error_with_async(|errors| async move {
                for error in errors {
                    eprintln!("tenant {tenant}: {error:#}");
                }
            })
            .await;

        println!("tenant {tenant}, wanted {wanted}: {outcome}");
    }
}
