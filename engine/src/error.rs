use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A weapon draw was attempted before the pool was populated.
    #[error("cannot draw a weapon from an empty pool")]
    EmptyPool,
}
