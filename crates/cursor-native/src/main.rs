//! Headless driver: replays a scripted pointer session through the cursor
//! engine against an in-memory page and logs each rendered frame.

use cursor_core::{
    staggered_delay, CursorConfig, CursorOverlay, FloatConfig, FloatingElement,
    InteractiveSurface, PointerTracker, Rect, SurfaceError, FLOAT_STAGGER_BASE_MS,
};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

#[derive(Clone, Debug)]
struct SimNode {
    id: u32,
    selector_class: &'static str,
    bounds: Rect,
}

/// In-memory page. Structural edits go through `insert`/`remove`, which the
/// driver follows with a rescan the way a mutation observer would.
#[derive(Default)]
struct SimPage {
    nodes: RefCell<Vec<SimNode>>,
    attached: Cell<usize>,
}

impl SimPage {
    fn insert(&self, id: u32, selector_class: &'static str, bounds: Rect) {
        self.nodes.borrow_mut().push(SimNode {
            id,
            selector_class,
            bounds,
        });
    }

    fn remove(&self, id: u32) {
        self.nodes.borrow_mut().retain(|n| n.id != id);
    }
}

impl InteractiveSurface for SimPage {
    type Node = u32;
    type Listener = u32;

    fn interactive_nodes(&self, selector: &str) -> Vec<u32> {
        let wanted: Vec<&str> = selector.split(',').map(str::trim).collect();
        self.nodes
            .borrow()
            .iter()
            .filter(|n| wanted.contains(&n.selector_class))
            .map(|n| n.id)
            .collect()
    }

    fn attach_hover(&self, node: &u32) -> Result<u32, SurfaceError> {
        self.attached.set(self.attached.get() + 1);
        Ok(*node)
    }

    fn detach_hover(&self, _listener: u32) {
        self.attached.set(self.attached.get().saturating_sub(1));
    }

    fn bounds(&self, node: &u32) -> Option<Rect> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.id == *node)
            .map(|n| n.bounds)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let page = SimPage::default();
    page.insert(1, "button", Rect::new(600.0, 300.0, 120.0, 40.0));
    page.insert(2, "a", Rect::new(100.0, 80.0, 60.0, 20.0));
    page.insert(3, "p", Rect::new(0.0, 400.0, 800.0, 200.0));

    let mut overlay: CursorOverlay<SimPage> = CursorOverlay::new(CursorConfig::default())?;
    let mut tracker: PointerTracker = overlay.new_tracker();
    let tracked = overlay.rescan(&mut tracker, &page);
    log::info!("tracking {} interactive nodes", tracked);

    let mut rng = StdRng::seed_from_u64(7);
    let mut floats = (0..2)
        .map(|i| {
            let config = FloatConfig {
                delay: staggered_delay(i, Duration::from_millis(FLOAT_STAGGER_BASE_MS)),
                ..FloatConfig::default()
            };
            FloatingElement::new(config, &mut rng)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let float_boxes = [
        Rect::new(200.0, 500.0, 80.0, 80.0),
        Rect::new(900.0, 150.0, 120.0, 60.0),
    ];

    let mut now = Instant::now();
    let mut frame_index = 0u32;
    let mut step = |overlay: &mut CursorOverlay<SimPage>,
                    tracker: &mut PointerTracker,
                    now: Instant,
                    frames: u32| {
        for _ in 0..frames {
            let frame = overlay.tick(tracker, &page, now);
            frame_index += 1;
            log::debug!(
                "frame {:>4} {:?} pos=({:.1},{:.1}) size={:.1} opacity={:.2} trail={}",
                frame_index,
                frame.indicator.color_state,
                frame.indicator.x,
                frame.indicator.y,
                frame.indicator.size,
                frame.indicator.opacity,
                frame.trail.len()
            );
            for (i, f) in floats.iter_mut().enumerate() {
                match f.tick(now, tracker.raw(), Some(float_boxes[i]), VIEWPORT) {
                    Ok(t) => log::trace!("float {} {}", i, t.to_css()),
                    Err(e) => log::warn!("float {} tick failed: {}", i, e),
                }
            }
        }
    };

    // sweep toward the button
    for k in 0..30 {
        let p = Vec2::new(300.0 + k as f32 * 10.0, 200.0 + k as f32 * 3.0);
        tracker.on_move(p, now);
        now += FRAME;
        step(&mut overlay, &mut tracker, now, 1);
    }

    // hover the button and press it
    overlay.hover_enter(&mut tracker, &1, page.bounds(&1));
    tracker.on_move(Vec2::new(630.0, 310.0), now);
    log::info!(
        "magnetic target ({:.1},{:.1}) for raw ({:.1},{:.1})",
        tracker.target().x,
        tracker.target().y,
        tracker.raw().x,
        tracker.raw().y
    );
    tracker.on_down();
    now += FRAME;
    step(&mut overlay, &mut tracker, now, 10);
    tracker.on_up();

    // the button disappears mid-hover
    page.remove(1);
    now += FRAME;
    step(&mut overlay, &mut tracker, now, 1);
    overlay.rescan(&mut tracker, &page);
    log::info!(
        "after removal: hovering={} target=({:.1},{:.1}) attached={}",
        overlay.registry().is_hovering(),
        tracker.target().x,
        tracker.target().y,
        page.attached.get()
    );

    // go idle past the hide window
    let idle = overlay.config().idle_hide;
    let frames = (idle.as_millis() / FRAME.as_millis()) as u32 + 2;
    for _ in 0..frames {
        now += FRAME;
        step(&mut overlay, &mut tracker, now, 1);
    }
    log::info!("idle for {:?}: hidden={}", idle, tracker.hidden());

    overlay.teardown(&mut tracker, &page);
    log::info!("done after {} frames; attached={}", frame_index, page.attached.get());
    Ok(())
}
