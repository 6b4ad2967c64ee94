pub mod get;

/// Aggregate player figures for the landing dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub num_total: u64,
    pub num_active: u64,
    pub num_inactive: u64,
    pub avg_balance_usd_cents: u64,
}
