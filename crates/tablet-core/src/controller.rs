use std::time::{Duration, Instant};

use crate::input::KeyInput;
use crate::oracle::{BlockingContext, GameStateOracle};
use crate::pulse::PulseTask;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(600);
pub const DEFAULT_BLOCKED_PULSE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub cooldown: Duration,
    pub blocked_pulse: Duration,
    pub toggle_key: String,
    pub close_key: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            blocked_pulse: DEFAULT_BLOCKED_PULSE,
            toggle_key: "F2".to_string(),
            close_key: "Escape".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    is_open: bool,
    last_toggle: Option<Instant>,
    is_blocked: bool,
}

impl ToggleState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// `None` until the first applied toggle.
    pub fn last_toggle(&self) -> Option<Instant> {
        self.last_toggle
    }

    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    Cooldown,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionResult {
    Applied { is_open: bool },
    Suppressed(SuppressReason),
}

impl TransitionResult {
    /// Only a blocked attempt is surfaced to the player; cooldown is silent.
    pub fn shows_feedback(&self) -> bool {
        matches!(self, Self::Suppressed(SuppressReason::Blocked))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Toggle(TransitionResult),
    Close,
    Ignored,
}

/// Owns the overlay's [`ToggleState`] and is its only writer.
pub struct VisibilityController<O> {
    cfg: ControllerConfig,
    state: ToggleState,
    oracle: O,
    pulse: PulseTask,
    last_block: Option<BlockingContext>,
}

impl<O: GameStateOracle> VisibilityController<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, ControllerConfig::default())
    }

    pub fn with_config(oracle: O, cfg: ControllerConfig) -> Self {
        Self {
            cfg,
            state: ToggleState::default(),
            oracle,
            pulse: PulseTask::new(),
            last_block: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.cfg
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_blocked(&self) -> bool {
        self.state.is_blocked
    }

    /// Context that caused the current blocked pulse, if one is showing.
    pub fn last_block(&self) -> Option<&BlockingContext> {
        if self.state.is_blocked {
            self.last_block.as_ref()
        } else {
            None
        }
    }

    pub fn pulse_deadline(&self) -> Option<Instant> {
        self.pulse.deadline()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn attempt_toggle(&mut self, now: Instant) -> TransitionResult {
        self.tick(now);

        if let Some(last) = self.state.last_toggle {
            if now.saturating_duration_since(last) < self.cfg.cooldown {
                tracing::debug!(
                    since_last_ms = now.saturating_duration_since(last).as_millis() as u64,
                    "toggle suppressed by cooldown"
                );
                return TransitionResult::Suppressed(SuppressReason::Cooldown);
            }
        }

        let ctx = BlockingContext::probe(&self.oracle);
        if ctx.is_blocking() {
            tracing::info!(reasons = %ctx.describe(), "toggle refused in blocking context");
            self.state.is_blocked = true;
            // a pending pulse keeps its deadline; later refusals don't extend it
            if !self.pulse.is_pending() {
                self.pulse.arm(now, self.cfg.blocked_pulse);
            }
            self.last_block = Some(ctx);
            return TransitionResult::Suppressed(SuppressReason::Blocked);
        }

        self.state.is_open = !self.state.is_open;
        self.state.last_toggle = Some(now);
        tracing::debug!(is_open = self.state.is_open, "overlay toggled");
        TransitionResult::Applied {
            is_open: self.state.is_open,
        }
    }

    pub fn close(&mut self) {
        if self.state.is_open {
            tracing::debug!("overlay closed");
        }
        self.state.is_open = false;
    }

    pub fn on_key_event<K: KeyInput + ?Sized>(&mut self, event: &mut K, now: Instant) -> KeyAction {
        if event.key() == self.cfg.toggle_key {
            event.prevent_default();
            return KeyAction::Toggle(self.attempt_toggle(now));
        }
        if event.key() == self.cfg.close_key && self.state.is_open {
            event.prevent_default();
            self.close();
            return KeyAction::Close;
        }
        KeyAction::Ignored
    }

    /// Runs deferred work that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.pulse.fire_if_due(now) {
            self.state.is_blocked = false;
            self.last_block = None;
        }
    }

    /// Tear the controller down. A pending pulse is cancelled, so the returned
    /// state is final.
    pub fn dispose(mut self) -> ToggleState {
        if self.pulse.cancel() {
            tracing::debug!("cancelled pending blocked pulse on dispose");
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyPress;
    use crate::oracle::{BlockingCondition, StaticOracle};
    use proptest::prelude::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn open_controller() -> VisibilityController<StaticOracle> {
        VisibilityController::new(StaticOracle::default())
    }

    #[test]
    fn first_toggle_is_never_cooled_down() {
        let mut ctl = open_controller();
        let t0 = Instant::now();

        assert_eq!(
            ctl.attempt_toggle(t0),
            TransitionResult::Applied { is_open: true }
        );
        assert_eq!(ctl.state().last_toggle(), Some(t0));
    }

    #[test]
    fn hotkey_scenario_respects_cooldown() {
        let mut ctl = open_controller();
        let t0 = Instant::now();

        let mut press = KeyPress::new("F2");
        assert_eq!(
            ctl.on_key_event(&mut press, t0),
            KeyAction::Toggle(TransitionResult::Applied { is_open: true })
        );
        assert!(press.default_prevented);

        let mut press = KeyPress::new("F2");
        assert_eq!(
            ctl.on_key_event(&mut press, t0 + ms(300)),
            KeyAction::Toggle(TransitionResult::Suppressed(SuppressReason::Cooldown))
        );
        assert!(press.default_prevented);
        assert!(ctl.is_open());

        let mut press = KeyPress::new("F2");
        ctl.on_key_event(&mut press, t0 + ms(700));
        assert!(!ctl.is_open());
    }

    #[test]
    fn blocked_scenario_pulses_for_two_seconds() {
        let mut ctl = VisibilityController::new(StaticOracle::with(BlockingCondition::Downed));
        let t0 = Instant::now();

        let res = ctl.attempt_toggle(t0);
        assert_eq!(res, TransitionResult::Suppressed(SuppressReason::Blocked));
        assert!(res.shows_feedback());
        assert!(!ctl.is_open());
        assert!(ctl.is_blocked());
        assert_eq!(ctl.state().last_toggle(), None);
        assert_eq!(
            ctl.last_block().map(|b| b.active.clone()),
            Some(vec![BlockingCondition::Downed])
        );

        ctl.tick(t0 + ms(1999));
        assert!(ctl.is_blocked());
        ctl.tick(t0 + ms(2000));
        assert!(!ctl.is_blocked());
        assert!(ctl.last_block().is_none());

        ctl.tick(t0 + ms(2001));
        assert!(!ctl.is_blocked());
    }

    #[test]
    fn cooldown_is_silent() {
        let mut ctl = open_controller();
        let t0 = Instant::now();
        ctl.attempt_toggle(t0);
        let res = ctl.attempt_toggle(t0 + ms(10));
        assert!(!res.shows_feedback());
        assert!(!ctl.is_blocked());
    }

    #[test]
    fn attempt_during_pulse_reprobes_oracle() {
        let mut ctl = VisibilityController::new(StaticOracle::with(BlockingCondition::InWater));
        let t0 = Instant::now();
        ctl.attempt_toggle(t0);
        assert!(ctl.is_blocked());

        ctl.oracle_mut().in_water = false;
        assert_eq!(
            ctl.attempt_toggle(t0 + ms(500)),
            TransitionResult::Applied { is_open: true }
        );
        // the pulse keeps its own schedule
        assert!(ctl.is_blocked());
        ctl.tick(t0 + ms(2000));
        assert!(!ctl.is_blocked());
        assert!(ctl.is_open());
    }

    #[test]
    fn repeated_block_keeps_first_deadline() {
        let mut ctl = VisibilityController::new(StaticOracle::with(BlockingCondition::Arrested));
        let t0 = Instant::now();
        ctl.attempt_toggle(t0);
        assert_eq!(
            ctl.attempt_toggle(t0 + ms(1500)),
            TransitionResult::Suppressed(SuppressReason::Blocked)
        );
        assert_eq!(ctl.pulse_deadline(), Some(t0 + ms(2000)));

        ctl.tick(t0 + ms(2000));
        assert!(!ctl.is_blocked());
        assert!(!ctl.is_open());

        // a refusal after the clear starts a new pulse
        ctl.attempt_toggle(t0 + ms(2500));
        assert!(ctl.is_blocked());
        assert_eq!(ctl.pulse_deadline(), Some(t0 + ms(4500)));
    }

    #[test]
    fn close_ignores_cooldown_and_blocking() {
        let mut ctl = open_controller();
        let t0 = Instant::now();
        ctl.attempt_toggle(t0);

        ctl.oracle_mut().in_vehicle_chase = true;
        ctl.close();
        assert!(!ctl.is_open());
        assert_eq!(ctl.state().last_toggle(), Some(t0));

        let before = ctl.state().clone();
        ctl.close();
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn escape_only_acts_while_open() {
        let mut ctl = open_controller();
        let t0 = Instant::now();

        let mut esc = KeyPress::new("Escape");
        assert_eq!(ctl.on_key_event(&mut esc, t0), KeyAction::Ignored);
        assert!(!esc.default_prevented);

        ctl.attempt_toggle(t0);
        let mut esc = KeyPress::new("Escape");
        assert_eq!(ctl.on_key_event(&mut esc, t0 + ms(1)), KeyAction::Close);
        assert!(esc.default_prevented);
        assert!(!ctl.is_open());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut ctl = open_controller();
        let mut key = KeyPress::new("F3");
        assert_eq!(ctl.on_key_event(&mut key, Instant::now()), KeyAction::Ignored);
        assert!(!key.default_prevented);
        assert_eq!(ctl.state(), &ToggleState::default());
    }

    #[test]
    fn configured_keys_replace_defaults() {
        let cfg = ControllerConfig {
            toggle_key: "F6".to_string(),
            ..ControllerConfig::default()
        };
        let mut ctl = VisibilityController::with_config(StaticOracle::default(), cfg);
        let t0 = Instant::now();

        assert_eq!(ctl.on_key_event(&mut KeyPress::new("F2"), t0), KeyAction::Ignored);
        assert_eq!(
            ctl.on_key_event(&mut KeyPress::new("F6"), t0),
            KeyAction::Toggle(TransitionResult::Applied { is_open: true })
        );
    }

    #[test]
    fn dispose_cancels_pending_pulse() {
        let mut ctl = VisibilityController::new(StaticOracle::with(BlockingCondition::InFreeFall));
        let t0 = Instant::now();
        ctl.attempt_toggle(t0);
        assert!(ctl.pulse_deadline().is_some());

        let state = ctl.dispose();
        assert!(state.is_blocked());
        assert!(!state.is_open());
    }

    proptest! {
        #[test]
        fn cooldown_holds_inside_window(gap in 0u64..600) {
            let mut ctl = open_controller();
            let t0 = Instant::now();
            ctl.attempt_toggle(t0);
            let before = ctl.is_open();
            let res = ctl.attempt_toggle(t0 + ms(gap));
            prop_assert_eq!(res, TransitionResult::Suppressed(SuppressReason::Cooldown));
            prop_assert_eq!(ctl.is_open(), before);
        }

        #[test]
        fn spaced_toggles_round_trip(gap in 600u64..10_000, start_open in any::<bool>()) {
            let mut ctl = open_controller();
            let t0 = Instant::now();
            if start_open {
                ctl.attempt_toggle(t0);
            }
            let original = ctl.is_open();
            let t1 = t0 + ms(600);
            ctl.attempt_toggle(t1);
            prop_assert_ne!(ctl.is_open(), original);
            ctl.attempt_toggle(t1 + ms(gap));
            prop_assert_eq!(ctl.is_open(), original);
        }

        #[test]
        fn blocking_never_changes_visibility(
            idx in 0usize..6,
            start_open in any::<bool>(),
            offset in 600u64..5_000,
        ) {
            let mut ctl = open_controller();
            let t0 = Instant::now();
            if start_open {
                ctl.attempt_toggle(t0);
            }
            ctl.oracle_mut().set(BlockingCondition::ALL[idx], true);

            let at = t0 + ms(offset);
            let res = ctl.attempt_toggle(at);
            prop_assert_eq!(res, TransitionResult::Suppressed(SuppressReason::Blocked));
            prop_assert_eq!(ctl.is_open(), start_open);
            prop_assert!(ctl.is_blocked());

            ctl.tick(at + ms(1999));
            prop_assert!(ctl.is_blocked());
            ctl.tick(at + ms(2000));
            prop_assert!(!ctl.is_blocked());
        }
    }
}
