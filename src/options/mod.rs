//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera, galaxy, robot, display, keybindings) are
//! consolidated here. Options serialize to/from TOML so a preset file can
//! override any subset of them.

mod camera;
mod display;
mod galaxy;
mod keybindings;
mod robot;

use std::path::Path;

pub use camera::{CameraOptions, DepthRange};
pub use display::DisplayOptions;
pub use galaxy::GalaxyOptions;
pub use keybindings::KeybindingOptions;
pub use robot::RobotOptions;
use serde::{Deserialize, Serialize};

use crate::error::StarbotError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection, zoom and spin parameters.
    pub camera: CameraOptions,
    /// Point-cloud generation and pointer-spin parameters.
    pub galaxy: GalaxyOptions,
    /// Robot motion step sizes.
    pub robot: RobotOptions,
    /// Clear colors and frame pacing.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, StarbotError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| StarbotError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StarbotError> {
        let content = std::fs::read_to_string(path).map_err(StarbotError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StarbotError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StarbotError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StarbotError::Io)?;
        }
        std::fs::write(path, content).map_err(StarbotError::Io)
    }

    /// Set one field by section and name, e.g. `("camera", "fovy", 60)`.
    ///
    /// The value goes through serde, so it must have the field's type.
    /// Unknown sections or fields are rejected rather than ignored.
    pub fn set_value(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), StarbotError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| StarbotError::OptionsParse(e.to_string()))?;
        let slot = root
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| {
                StarbotError::OptionsParse(format!(
                    "no option named {section}.{field}"
                ))
            })?;
        *slot = value;

        let mut updated: Self = serde_json::from_value(root).map_err(|e| {
            StarbotError::OptionsParse(format!("{section}.{field}: {e}"))
        })?;
        updated.keybindings.rebuild_reverse_map();
        *self = updated;
        Ok(())
    }

    /// Apply a `section.field=value` override. The value is read as JSON
    /// when it parses, otherwise as a plain string.
    pub fn apply_override(
        &mut self,
        assignment: &str,
    ) -> Result<(), StarbotError> {
        let bad = || {
            StarbotError::OptionsParse(format!(
                "expected section.field=value, got '{assignment}'"
            ))
        };
        let (path, raw) = assignment.split_once('=').ok_or_else(bad)?;
        let (section, field) = path.trim().split_once('.').ok_or_else(bad)?;
        let raw = raw.trim();
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()));
        self.set_value(section, field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
max_zoom = 8.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.max_zoom, 8.0);
        // Everything else should be default
        assert_eq!(opts.camera.zoom_step, 0.5);
        assert_eq!(opts.camera.fovy, 90.0);
        assert_eq!(opts.galaxy.star_count, 5000);
        assert_eq!(opts.robot.wave_angle, 75.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, StarbotError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowDown"),
            Some(KeyAction::ZoomOut)
        );
        assert_eq!(opts.keybindings.lookup("KeyJ"), Some(KeyAction::Jump));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_rebuild_the_reverse_map_on_load() {
        let toml_str = r#"
[keybindings.bindings]
reverse_spin = "Space"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ReverseSpin)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }

    #[test]
    fn save_then_load_keeps_the_seed() {
        let dir = std::env::temp_dir()
            .join(format!("starbot-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.galaxy.seed = Some(7);
        opts.save(&dir.join("seeded.toml")).unwrap();

        let loaded = Options::load(&dir.join("seeded.toml")).unwrap();
        assert_eq!(loaded.galaxy.seed, Some(7));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn overrides_set_typed_fields() {
        let mut opts = Options::default();
        opts.apply_override("camera.fovy=60").unwrap();
        opts.apply_override("galaxy.seed = 42").unwrap();
        opts.apply_override("camera.depth_range=zero_to_one").unwrap();
        assert_eq!(opts.camera.fovy, 60.0);
        assert_eq!(opts.galaxy.seed, Some(42));
        assert_eq!(opts.camera.depth_range, DepthRange::ZeroToOne);
    }

    #[test]
    fn bad_overrides_leave_options_untouched() {
        let mut opts = Options::default();
        assert!(opts.apply_override("camera.fovy").is_err());
        assert!(opts.apply_override("fovy=60").is_err());
        assert!(opts.apply_override("camera.nope=1").is_err());
        assert!(opts.apply_override("robot.turn_step=\"fast\"").is_err());
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn overrides_keep_key_lookup_working() {
        let mut opts = Options::default();
        opts.apply_override("robot.jump_height=2.0").unwrap();
        assert_eq!(opts.keybindings.lookup("KeyJ"), Some(KeyAction::Jump));
    }
}
