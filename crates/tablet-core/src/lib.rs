pub mod controller;
pub mod demo;
pub mod input;
pub mod nav;
pub mod oracle;
pub mod pulse;
pub mod settings;

pub use controller::{
    ControllerConfig, KeyAction, SuppressReason, ToggleState, TransitionResult,
    VisibilityController,
};
pub use input::{KeyInput, KeyPress};
pub use nav::{AppId, Category, ShellNav};
pub use oracle::{BlockingCondition, BlockingContext, GameStateOracle, OracleError, StaticOracle};
pub use pulse::PulseTask;
pub use settings::TabletSettings;
