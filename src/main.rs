//! Headless demo: plays a scripted session against an in-memory page.
//!
//! ```text
//! RUST_LOG=info vantage [options.toml]
//! ```

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use vantage::host::memory::MemoryPage;
use vantage::host::PageHost;
use vantage::options::Options;
use vantage::render::headless::HeadlessRenderer;
use vantage::{VantageCommand, VantageEngine, VantageError};
use web_time::Instant;

const VIEWPORT_HEIGHT: f32 = 900.0;
const ASPECT: f32 = 16.0 / 9.0;
const FRAME: Duration = Duration::from_millis(16);
const SCROLL_STEP: f32 = 45.0;

type Engine = VantageEngine<MemoryPage, HeadlessRenderer>;

/// Simulated clock: every frame advances by exactly one 60 Hz tick.
struct Session {
    engine: Engine,
    now: Instant,
}

impl Session {
    fn frame(&mut self) {
        self.now += FRAME;
        self.engine.frame(self.now);
    }

    fn run_for(&mut self, duration: Duration) {
        let end = self.now + duration;
        while self.now < end {
            self.frame();
        }
    }

    fn execute(&mut self, command: VantageCommand) {
        self.engine.execute(command, self.now);
    }

    fn click(&mut self, selector: &str) {
        log::info!("click {selector}");
        self.execute(VantageCommand::Click {
            selector: selector.to_owned(),
        });
    }

    fn scroll_to(&mut self, target: f32) {
        let target = target.clamp(0.0, self.engine.page().max_scroll());
        loop {
            let y = self.engine.page().scroll_y();
            if (y - target).abs() < 0.5 {
                break;
            }
            let step = (target - y).clamp(-SCROLL_STEP, SCROLL_STEP);
            self.engine.page_mut().set_scroll(y + step);
            self.execute(VantageCommand::Scrolled);
            self.frame();
        }
        self.log_camera("scrolled");
    }

    fn log_camera(&self, label: &str) {
        let camera = self.engine.camera();
        log::info!(
            "{label}: scroll {:.0}, mode {:?}, position {:.2}, target {:.2}",
            self.engine.page().scroll_y(),
            self.engine.mode(),
            camera.position,
            camera.target
        );
    }
}

fn load_options() -> Result<Options, VantageError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

fn run() -> Result<(), VantageError> {
    let options = load_options()?;
    let page = MemoryPage::four_sections(VIEWPORT_HEIGHT);
    let renderer = HeadlessRenderer::with_options(&options.camera, ASPECT)
        .with_material(&options.palette.material, [1.0; 3]);
    let mut session = Session {
        engine: VantageEngine::new(options, page, renderer)?,
        now: Instant::now(),
    };
    session.frame();
    session.log_camera("start");

    // Presentation: scroll down through the narrative, then jump back.
    for section in 1..=3 {
        session.scroll_to(section as f32 * VIEWPORT_HEIGHT);
    }
    session.click(".button--footer");
    session.frame();
    session.log_camera("back to top");
    session.click(".button--hero");
    session.frame();
    session.log_camera("hero button");

    // Customizer: hand off, orbit, recolor, hand back.
    session.click(".button--customize");
    session.run_for(Duration::from_millis(2100));
    session.log_camera("customizer");
    for _ in 0..30 {
        session.execute(VantageCommand::Orbit {
            delta: Vec2::new(6.0, 1.5),
        });
        session.frame();
    }
    session.execute(VantageCommand::Zoom { delta: 2.0 });
    session.click(".button--colors.red");
    session.frame();
    session.log_camera("orbited");

    session.click(".button--exit");
    session.run_for(Duration::from_millis(1100));
    session.log_camera("presentation");

    let stats = session.engine.frame_stats();
    let counters = session.engine.renderer().counters();
    log::info!(
        "{} ticks, {} recomputes, {} frames drawn",
        stats.ticks,
        counters.recomputes,
        counters.frames
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
