use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("game state unavailable: {0}")]
    Unavailable(String),
    #[error("query {query} failed: {reason}")]
    Query {
        query: &'static str,
        reason: String,
    },
}

/// Read-only view of the game conditions that forbid opening the tablet.
///
/// Queries are synchronous and side-effect free. An `Err` means the state is
/// unknown, which callers must treat as blocking.
pub trait GameStateOracle {
    fn is_downed(&self) -> Result<bool, OracleError>;
    fn is_arrested(&self) -> Result<bool, OracleError>;
    fn is_in_water(&self) -> Result<bool, OracleError>;
    fn is_in_free_fall(&self) -> Result<bool, OracleError>;
    fn is_in_vehicle_chase(&self) -> Result<bool, OracleError>;
    fn is_in_critical_minigame(&self) -> Result<bool, OracleError>;
}

impl<T: GameStateOracle + ?Sized> GameStateOracle for Box<T> {
    fn is_downed(&self) -> Result<bool, OracleError> {
        (**self).is_downed()
    }
    fn is_arrested(&self) -> Result<bool, OracleError> {
        (**self).is_arrested()
    }
    fn is_in_water(&self) -> Result<bool, OracleError> {
        (**self).is_in_water()
    }
    fn is_in_free_fall(&self) -> Result<bool, OracleError> {
        (**self).is_in_free_fall()
    }
    fn is_in_vehicle_chase(&self) -> Result<bool, OracleError> {
        (**self).is_in_vehicle_chase()
    }
    fn is_in_critical_minigame(&self) -> Result<bool, OracleError> {
        (**self).is_in_critical_minigame()
    }
}

impl<T: GameStateOracle + ?Sized> GameStateOracle for &T {
    fn is_downed(&self) -> Result<bool, OracleError> {
        (**self).is_downed()
    }
    fn is_arrested(&self) -> Result<bool, OracleError> {
        (**self).is_arrested()
    }
    fn is_in_water(&self) -> Result<bool, OracleError> {
        (**self).is_in_water()
    }
    fn is_in_free_fall(&self) -> Result<bool, OracleError> {
        (**self).is_in_free_fall()
    }
    fn is_in_vehicle_chase(&self) -> Result<bool, OracleError> {
        (**self).is_in_vehicle_chase()
    }
    fn is_in_critical_minigame(&self) -> Result<bool, OracleError> {
        (**self).is_in_critical_minigame()
    }
}

/// Fixed answers, one flag per query. Used by the viewer (seeded from its
/// config file) and as a deterministic fake in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticOracle {
    pub downed: bool,
    pub arrested: bool,
    pub in_water: bool,
    pub in_free_fall: bool,
    pub in_vehicle_chase: bool,
    pub in_critical_minigame: bool,
}

impl StaticOracle {
    pub fn with(condition: BlockingCondition) -> Self {
        let mut oracle = Self::default();
        oracle.set(condition, true);
        oracle
    }

    pub fn set(&mut self, condition: BlockingCondition, value: bool) {
        match condition {
            BlockingCondition::Downed => self.downed = value,
            BlockingCondition::Arrested => self.arrested = value,
            BlockingCondition::InWater => self.in_water = value,
            BlockingCondition::InFreeFall => self.in_free_fall = value,
            BlockingCondition::InVehicleChase => self.in_vehicle_chase = value,
            BlockingCondition::InCriticalMinigame => self.in_critical_minigame = value,
        }
    }
}

impl GameStateOracle for StaticOracle {
    fn is_downed(&self) -> Result<bool, OracleError> {
        Ok(self.downed)
    }
    fn is_arrested(&self) -> Result<bool, OracleError> {
        Ok(self.arrested)
    }
    fn is_in_water(&self) -> Result<bool, OracleError> {
        Ok(self.in_water)
    }
    fn is_in_free_fall(&self) -> Result<bool, OracleError> {
        Ok(self.in_free_fall)
    }
    fn is_in_vehicle_chase(&self) -> Result<bool, OracleError> {
        Ok(self.in_vehicle_chase)
    }
    fn is_in_critical_minigame(&self) -> Result<bool, OracleError> {
        Ok(self.in_critical_minigame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockingCondition {
    Downed,
    Arrested,
    InWater,
    InFreeFall,
    InVehicleChase,
    InCriticalMinigame,
}

impl BlockingCondition {
    pub const ALL: [BlockingCondition; 6] = [
        Self::Downed,
        Self::Arrested,
        Self::InWater,
        Self::InFreeFall,
        Self::InVehicleChase,
        Self::InCriticalMinigame,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Downed => "downed",
            Self::Arrested => "arrested",
            Self::InWater => "in water",
            Self::InFreeFall => "in free fall",
            Self::InVehicleChase => "in a vehicle chase",
            Self::InCriticalMinigame => "in a critical minigame",
        }
    }

    fn query_name(self) -> &'static str {
        match self {
            Self::Downed => "is_downed",
            Self::Arrested => "is_arrested",
            Self::InWater => "is_in_water",
            Self::InFreeFall => "is_in_free_fall",
            Self::InVehicleChase => "is_in_vehicle_chase",
            Self::InCriticalMinigame => "is_in_critical_minigame",
        }
    }

    fn query<O: GameStateOracle + ?Sized>(self, oracle: &O) -> Result<bool, OracleError> {
        match self {
            Self::Downed => oracle.is_downed(),
            Self::Arrested => oracle.is_arrested(),
            Self::InWater => oracle.is_in_water(),
            Self::InFreeFall => oracle.is_in_free_fall(),
            Self::InVehicleChase => oracle.is_in_vehicle_chase(),
            Self::InCriticalMinigame => oracle.is_in_critical_minigame(),
        }
    }
}

/// Snapshot of the oracle taken at one toggle attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingContext {
    pub active: Vec<BlockingCondition>,
    /// At least one query failed; the context blocks regardless of `active`.
    pub indeterminate: bool,
}

impl BlockingContext {
    pub fn probe<O: GameStateOracle + ?Sized>(oracle: &O) -> Self {
        let mut ctx = Self::default();
        for condition in BlockingCondition::ALL {
            match condition.query(oracle) {
                Ok(true) => ctx.active.push(condition),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(
                        query = condition.query_name(),
                        error = %err,
                        "game state query failed; treating as blocked"
                    );
                    ctx.indeterminate = true;
                }
            }
        }
        ctx
    }

    pub fn is_blocking(&self) -> bool {
        self.indeterminate || !self.active.is_empty()
    }

    pub fn describe(&self) -> String {
        let mut parts: Vec<&str> = self.active.iter().map(|c| c.label()).collect();
        if self.indeterminate {
            parts.push("game state unknown");
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl GameStateOracle for Unreachable {
        fn is_downed(&self) -> Result<bool, OracleError> {
            Ok(false)
        }
        fn is_arrested(&self) -> Result<bool, OracleError> {
            Err(OracleError::Unavailable("bridge offline".to_string()))
        }
        fn is_in_water(&self) -> Result<bool, OracleError> {
            Ok(false)
        }
        fn is_in_free_fall(&self) -> Result<bool, OracleError> {
            Ok(false)
        }
        fn is_in_vehicle_chase(&self) -> Result<bool, OracleError> {
            Ok(false)
        }
        fn is_in_critical_minigame(&self) -> Result<bool, OracleError> {
            Ok(false)
        }
    }

    #[test]
    fn clear_oracle_does_not_block() {
        let ctx = BlockingContext::probe(&StaticOracle::default());
        assert!(!ctx.is_blocking());
        assert!(ctx.describe().is_empty());
    }

    #[test]
    fn each_condition_blocks_on_its_own() {
        for condition in BlockingCondition::ALL {
            let ctx = BlockingContext::probe(&StaticOracle::with(condition));
            assert!(ctx.is_blocking(), "{condition:?} should block");
            assert_eq!(ctx.active, vec![condition]);
        }
    }

    #[test]
    fn failed_query_is_fail_safe() {
        let ctx = BlockingContext::probe(&Unreachable);
        assert!(ctx.indeterminate);
        assert!(ctx.active.is_empty());
        assert!(ctx.is_blocking());
        assert_eq!(ctx.describe(), "game state unknown");
    }

    #[test]
    fn boxed_oracle_forwards_queries() {
        let boxed: Box<dyn GameStateOracle> = Box::new(StaticOracle::with(BlockingCondition::InWater));
        let ctx = BlockingContext::probe(&boxed);
        assert_eq!(ctx.active, vec![BlockingCondition::InWater]);
    }

    #[test]
    fn static_oracle_reads_from_toml() {
        let oracle: StaticOracle = toml::from_str("arrested = true").expect("parse oracle");
        assert_eq!(oracle, StaticOracle::with(BlockingCondition::Arrested));
    }
}
