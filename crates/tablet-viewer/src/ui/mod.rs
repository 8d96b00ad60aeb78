pub mod hud;
pub mod panels;
pub mod shell;
pub mod shortcuts;
pub mod visuals;

pub use hud::hud_overlay;
pub use shell::tablet_shell;
pub use shortcuts::handle_shortcuts;
pub use visuals::apply_visuals;

pub const HUD_EDGE_PADDING: f32 = 16.0;
pub const SHELL_INSET: f32 = 16.0;
pub const SHELL_NAV_W: f32 = 260.0;
