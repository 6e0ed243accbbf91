use std::time::Duration;

use tokio::time::interval;

use crate::repositories::hiring::HiringStateRepository;
use crate::use_cases::hiring::HiringHandler;

/// Fixed-interval reconciliation poll. Picks up status changes written to
/// the shared store by the acceptance dashboard and keeps every booking
/// marker consistent with the request log.
pub async fn start_reconcile_task<R>(workflow: HiringHandler<R>, period: Duration)
where
    R: HiringStateRepository,
{
    let mut interval = interval(period);

    loop {
        interval.tick().await;

        match workflow.reconcile_all().await {
            Ok(count) => tracing::debug!("Reconciled booking state for {} freelancers", count),
            Err(e) => tracing::error!("Booking state reconciliation failed: {}", e),
        }
    }
}
