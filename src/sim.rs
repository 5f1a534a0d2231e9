//! Headless in-memory surface.
//!
//! The single concrete container representation shipped with the crate:
//! nodes behind shared handles, a small selector subset (tag name or
//! `.class`), and recorded inline styles so callers can observe exactly
//! what the widget wrote. Used by the demo binary and the integration
//! tests; a DOM binding would implement the same traits instead.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;

use crate::events::SurfaceEvent;
use crate::surface::{Container, Element, Frame, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

#[derive(Debug)]
struct ElementState {
    tag: String,
    classes: Vec<String>,
    natural: Size,
    position: Position,
    frame: Option<Frame>,
    style_writes: u64,
}

/// Cheap shared handle to an element node.
#[derive(Debug, Clone)]
pub struct SimElement {
    state: Arc<Mutex<ElementState>>,
}

impl SimElement {
    pub fn new(tag: impl Into<String>, natural: Size) -> Self {
        Self {
            state: Arc::new(Mutex::new(ElementState {
                tag: tag.into(),
                classes: Vec::new(),
                natural,
                position: Position::Static,
                frame: None,
                style_writes: 0,
            })),
        }
    }

    /// An `img` node with the given intrinsic dimensions.
    pub fn image(natural: Size) -> Self {
        Self::new("img", natural)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.lock().classes.push(class.to_owned());
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.lock().classes.iter().any(|c| c == name)
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    /// The last applied frame, if any fit pass has run.
    pub fn frame(&self) -> Option<Frame> {
        self.lock().frame
    }

    /// Count of inline style mutations (positioning and frames; class
    /// changes do not count).
    pub fn style_writes(&self) -> u64 {
        self.lock().style_writes
    }

    fn matches(&self, selector: &str) -> bool {
        let state = self.lock();
        match selector.strip_prefix('.') {
            Some(class) => state.classes.iter().any(|c| c == class),
            None => state.tag == selector,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ElementState> {
        self.state.lock().expect("sim element poisoned")
    }
}

impl Element for SimElement {
    fn natural_size(&self) -> Size {
        self.lock().natural
    }

    fn set_absolute(&self) {
        let mut state = self.lock();
        state.position = Position::Absolute;
        state.style_writes += 1;
    }

    fn add_class(&self, name: &str) {
        let mut state = self.lock();
        if !state.classes.iter().any(|c| c == name) {
            state.classes.push(name.to_owned());
        }
    }

    fn remove_class(&self, name: &str) {
        self.lock().classes.retain(|c| c != name);
    }

    fn apply_frame(&self, frame: &Frame) {
        let mut state = self.lock();
        state.frame = Some(*frame);
        state.style_writes += 1;
    }
}

#[derive(Debug)]
struct ContainerState {
    size: Size,
    position: Position,
    overflow: Overflow,
    children: Vec<SimElement>,
}

/// Cheap shared handle to a container node.
#[derive(Debug, Clone)]
pub struct SimContainer {
    state: Arc<Mutex<ContainerState>>,
}

impl SimContainer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContainerState {
                size: Size::new(width, height),
                position: Position::Static,
                overflow: Overflow::Visible,
                children: Vec::new(),
            })),
        }
    }

    pub fn with_child(self, child: SimElement) -> Self {
        self.lock().children.push(child);
        self
    }

    pub fn with_position(self, position: Position) -> Self {
        self.lock().position = position;
        self
    }

    /// Mutate the rendered size, as a responsive layout change would.
    pub fn resize(&self, width: f64, height: f64) {
        self.lock().size = Size::new(width, height);
    }

    pub fn position(&self) -> Position {
        self.lock().position
    }

    pub fn overflow(&self) -> Overflow {
        self.lock().overflow
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContainerState> {
        self.state.lock().expect("sim container poisoned")
    }
}

impl Container for SimContainer {
    type Target = SimElement;

    fn rendered_size(&self) -> Size {
        self.lock().size
    }

    fn select(&self, selector: &str) -> Option<SimElement> {
        self.lock()
            .children
            .iter()
            .find(|child| child.matches(selector))
            .cloned()
    }

    fn clip_and_anchor(&self) {
        let mut state = self.lock();
        state.overflow = Overflow::Hidden;
        if state.position == Position::Static {
            state.position = Position::Relative;
        }
    }
}

/// Play a resize script against `container` from a plain thread, raising a
/// [`SurfaceEvent::Resized`] after each step, the way a platform event
/// source would.
pub fn drive(
    container: SimContainer,
    steps: Vec<Size>,
    pace: Duration,
    tx: Sender<SurfaceEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for step in steps {
            thread::sleep(pace);
            container.resize(step.width, step.height);
            if tx.send(SurfaceEvent::Resized).is_err() {
                break;
            }
        }
    })
}
