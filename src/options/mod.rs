//! Viewport options with TOML preset support.
//!
//! All tweakable settings (navigation tuning, overlay colors, keybindings)
//! are consolidated here. Options serialize to/from TOML so presets can be
//! stored next to the host application's other settings.

mod camera;
mod colors;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VistaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Navigation tuning.
    pub camera: CameraOptions,
    /// Background and axis overlay colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VistaError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VistaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)
    }

    /// Preset names (TOML file stems) in `dir`, sorted. A missing or
    /// unreadable directory has no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn save_then_load_from_preset_dir() {
        let dir = tempfile::tempdir().unwrap();
        let presets = dir.path().join("presets");
        let mut opts = Options::default();
        opts.camera.zoom_base = 1.004;
        opts.colors.axis_width = 3.5;
        let _ = opts
            .keybindings
            .bindings
            .insert(KeyAction::ResetView, "KeyR".into());
        opts.keybindings.rebuild_reverse_map();

        opts.save(&presets.join("wide.toml")).unwrap();
        Options::default().save(&presets.join("closeup.toml")).unwrap();
        std::fs::write(presets.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&presets), ["closeup", "wide"]);
        let loaded = Options::load(&presets.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            loaded.keybindings.lookup("KeyR", false),
            Some(KeyAction::ResetView)
        );
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Options::list_presets(&dir.path().join("absent")).is_empty());
        assert!(matches!(
            Options::load(&dir.path().join("absent.toml")),
            Err(VistaError::Io(_))
        ));
    }

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
orbit_sensitivity = 0.02
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.orbit_sensitivity, 0.02);
        // Everything else should be default
        assert_eq!(opts.camera.zoom_base, 1.001);
        assert_eq!(opts.colors.axis_width, 2.0);
    }

    #[test]
    fn keybinding_lookup_respects_shift() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyA", true),
            Some(KeyAction::OpenMenu)
        );
        assert_eq!(opts.keybindings.lookup("KeyA", false), None);
        assert_eq!(
            opts.keybindings.lookup("Home", false),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("Home", true), None);
    }

    #[test]
    fn rebinding_from_toml_rebuilds_lookup() {
        let toml_str = r#"
[keybindings.bindings]
open_menu = "Space"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Space", false),
            Some(KeyAction::OpenMenu)
        );
        assert_eq!(opts.keybindings.lookup("KeyA", true), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nzoom_base = ").unwrap_err();
        assert!(matches!(err, VistaError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("zoom_base").is_some());
        assert!(camera.get("orbit_sensitivity").is_some());
        assert!(camera.get("min_scale").is_none());
    }
}
