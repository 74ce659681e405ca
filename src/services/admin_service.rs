use tracing::info;

use crate::{
    dto::admin::{ActionResponse, InitTimersResponse},
    error::ServiceError,
    services::standings::{self, RecalculateOutcome},
    state::SharedState,
};

/// Run the bulk standings recalculation repair tool.
pub async fn recalculate_standings(
    state: &SharedState,
) -> Result<RecalculateOutcome, ServiceError> {
    let store = state.store();
    Ok(standings::recalculate_all(store.as_ref()).await?)
}

/// Re-run the startup clock reconciliation pass on demand.
pub async fn init_timers(state: &SharedState) -> Result<InitTimersResponse, ServiceError> {
    let timers_started = state.clock().reconcile_on_startup().await?;
    Ok(InitTimersResponse { timers_started })
}

/// Wipe the whole dataset and stop every live clock.
pub async fn reset(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    state.clock().stop_all();
    state.store().reset().await?;
    info!("store reset");
    Ok(ActionResponse {
        message: "store reset".into(),
    })
}
