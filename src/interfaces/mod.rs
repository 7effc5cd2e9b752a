// ============================================================================
// Interfaces Module
// Money capability traits and the wire contract
// ============================================================================

mod base_money;
mod money_ops;

pub mod wire;

pub use base_money::{BaseMoney, MoneyType};
pub use money_ops::MoneyOps;
