//! Options methods for VantageEngine

use std::path::Path;

use super::{build_timeline, VantageEngine};
use crate::camera::controller::OrbitControls;
use crate::error::VantageError;
use crate::host::PageHost;
use crate::mode::CustomizerPreset;
use crate::options::Options;
use crate::render::Renderer;

impl<P: PageHost, R: Renderer> VantageEngine<P, R> {
    /// Replace options and apply all changes to subsystems.
    ///
    /// The new timeline is validated before anything is replaced; on error
    /// the engine keeps its current options.
    pub fn set_options(&mut self, new: Options) -> Result<(), VantageError> {
        let mut timeline = build_timeline(&new)?;
        timeline.resolve(&self.page);
        self.timeline = timeline;
        self.controls = OrbitControls::new(&new.camera);
        self.mode.set_preset(CustomizerPreset::from(&new.customizer));
        self.options = new;
        self.sync_to_scroll();
        Ok(())
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::MemoryPage;
    use crate::render::headless::HeadlessRenderer;

    fn engine() -> VantageEngine<MemoryPage, HeadlessRenderer> {
        VantageEngine::new(
            Options::default(),
            MemoryPage::four_sections(800.0),
            HeadlessRenderer::new(1.5),
        )
        .unwrap()
    }

    #[test]
    fn set_options_rebinds_timeline() {
        let mut engine = engine();
        engine.page_mut().set_scroll(1600.0);
        let mut options = Options::default();
        options.timeline.segments.truncate(2);
        engine.set_options(options).unwrap();
        assert_eq!(engine.timeline().segments().len(), 2);
        assert_eq!(*engine.camera(), engine.timeline().evaluate(1600.0));
    }

    #[test]
    fn invalid_options_keep_current_ones() {
        let mut engine = engine();
        let mut options = Options::default();
        options.timeline.segments[2].end = "middle of nowhere".to_owned();
        assert!(engine.set_options(options).is_err());
        assert_eq!(engine.timeline().segments().len(), 6);
    }

    #[test]
    fn missing_preset_fails_softly() {
        let mut engine = engine();
        let dir = std::env::temp_dir().join("vantage-no-such-presets");
        assert!(!engine.load_preset("absent", &dir));
        assert_eq!(engine.options(), &Options::default());
    }

    #[test]
    fn presets_round_trip_through_disk() {
        let mut engine = engine();
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut options = Options::default();
        options.customizer.enter_duration_ms = 750;
        engine.set_options(options.clone()).unwrap();
        assert!(engine.save_preset("slow", &dir));
        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);

        engine.set_options(Options::default()).unwrap();
        assert!(engine.load_preset("slow", &dir));
        assert_eq!(engine.options(), &options);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
