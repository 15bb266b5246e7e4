/// Cancellers registered while mounting, run once on unmount.
///
/// Cancellers run in reverse registration order, so later hooks that depend
/// on earlier ones are released first. Dropping an un-run `Teardown` runs it.
#[derive(Default)]
pub struct Teardown {
    cancellers: Vec<(&'static str, Box<dyn FnOnce()>)>,
    done: bool,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str, cancel: impl FnOnce() + 'static) {
        if self.done {
            // already torn down; release immediately
            cancel();
            return;
        }
        self.cancellers.push((label, Box::new(cancel)));
    }

    pub fn len(&self) -> usize {
        self.cancellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cancellers.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Run every canceller. Idempotent.
    pub fn run(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        while let Some((label, cancel)) = self.cancellers.pop() {
            log::trace!("[teardown] {}", label);
            cancel();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}
