/// Active chart registry - at most one live chart handle per mount point
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::ChartHandle;

lazy_static! {
    static ref ACTIVE_CHARTS: Mutex<HashMap<String, ChartHandle>> = Mutex::new(HashMap::new());
}

/// Record a freshly rendered chart, returning the handle it displaced.
/// Re-rendering a mount point replaces the previous chart instead of
/// leaking it.
pub fn register(handle: ChartHandle) -> Option<ChartHandle> {
    let mut charts = ACTIVE_CHARTS.lock().unwrap();
    charts.insert(handle.mount.clone(), handle)
}

/// Look up the live chart on a mount point
pub fn active(mount: &str) -> Option<ChartHandle> {
    ACTIVE_CHARTS.lock().unwrap().get(mount).cloned()
}

/// Drop the live chart on a mount point
pub fn release(mount: &str) -> Option<ChartHandle> {
    ACTIVE_CHARTS.lock().unwrap().remove(mount)
}
