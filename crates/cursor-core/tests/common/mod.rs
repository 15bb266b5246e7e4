// In-memory interactive surface shared by the host-side tests.

#![allow(dead_code)]
use cursor_core::{InteractiveSurface, Rect, SurfaceError};
use std::cell::{Cell, RefCell};

pub struct FakeSurface {
    pub nodes: RefCell<Vec<(u32, Rect)>>,
    pub live_listeners: Cell<usize>,
    pub attach_calls: Cell<usize>,
    pub detach_calls: Cell<usize>,
    pub fail_attach: RefCell<Vec<u32>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            live_listeners: Cell::new(0),
            attach_calls: Cell::new(0),
            detach_calls: Cell::new(0),
            fail_attach: RefCell::new(Vec::new()),
        }
    }

    pub fn insert(&self, id: u32, bounds: Rect) {
        self.nodes.borrow_mut().push((id, bounds));
    }

    pub fn remove(&self, id: u32) {
        self.nodes.borrow_mut().retain(|(n, _)| *n != id);
    }

    pub fn move_to(&self, id: u32, bounds: Rect) {
        for (n, b) in self.nodes.borrow_mut().iter_mut() {
            if *n == id {
                *b = bounds;
            }
        }
    }
}

impl InteractiveSurface for FakeSurface {
    type Node = u32;
    type Listener = u32;

    fn interactive_nodes(&self, _selector: &str) -> Vec<u32> {
        self.nodes.borrow().iter().map(|(n, _)| *n).collect()
    }

    fn attach_hover(&self, node: &u32) -> Result<u32, SurfaceError> {
        self.attach_calls.set(self.attach_calls.get() + 1);
        if self.fail_attach.borrow().contains(node) {
            return Err(SurfaceError::Attach(format!("node {node}")));
        }
        self.live_listeners.set(self.live_listeners.get() + 1);
        Ok(*node)
    }

    fn detach_hover(&self, _listener: u32) {
        self.detach_calls.set(self.detach_calls.get() + 1);
        self.live_listeners.set(self.live_listeners.get() - 1);
    }

    fn bounds(&self, node: &u32) -> Option<Rect> {
        self.nodes
            .borrow()
            .iter()
            .find(|(n, _)| n == node)
            .map(|(_, b)| *b)
    }
}

/// 100×40 box centred on (cx, cy).
pub fn box_at(cx: f32, cy: f32) -> Rect {
    Rect::new(cx - 50.0, cy - 20.0, 100.0, 40.0)
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
