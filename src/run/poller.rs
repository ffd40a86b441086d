use std::sync::Arc;

use alloy::primitives::Address;
use tokio::task::JoinSet;

use crate::model::Field;
use crate::reactive::{Dashboard, Reading};
use crate::source::ChainDataSource;

/// Outcome counts of one refresh pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshStats {
    pub resolved: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Issue every read concurrently and apply results in completion order.
///
/// Account-scoped reads are skipped (left idle) while `account` is `None`.
/// A failed read keeps its last value; the dashboard is never left loading.
pub async fn refresh(
    source: Arc<dyn ChainDataSource>,
    account: Option<Address>,
    dashboard: &mut Dashboard,
) -> RefreshStats {
    let mut stats = RefreshStats::default();
    let mut reads = JoinSet::new();

    for field in Field::ALL {
        if field.needs_account() && account.is_none() {
            dashboard.set(field, Reading::idle());
            stats.skipped += 1;
            continue;
        }
        dashboard.start_loading(field);
        let source = Arc::clone(&source);
        reads.spawn(async move { (field, source.read(field, account).await) });
    }

    while let Some(joined) = reads.join_next().await {
        match joined {
            Ok((field, Ok(value))) => {
                tracing::debug!(%field, %value, "read resolved");
                dashboard.resolve(field, value);
                stats.resolved += 1;
            }
            Ok((field, Err(e))) => {
                tracing::warn!(%field, error = %format!("{e:#}"), "read failed, keeping last value");
                dashboard.fail(field);
                stats.failed += 1;
            }
            Err(e) => {
                // The field is unknown once its task is gone.
                tracing::error!(error = %e, "read task aborted");
                stats.failed += 1;
            }
        }
    }

    // Aborted tasks leave their field loading; clear those flags.
    for field in Field::ALL {
        if dashboard.reading(field).loading {
            dashboard.fail(field);
        }
    }

    stats
}
