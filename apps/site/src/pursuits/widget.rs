//! Open/closed state of the pursuits gallery.
//!
//! The widget owns at most one active entry. While it is open it holds two
//! guards against the page [`Document`]: a scroll lock on the body and a
//! keydown listener registration. Both are released when the overlay closes
//! or when the widget itself is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use maud::{html, Markup};

use crate::pursuits::models::{find_pursuit, Pursuit};
use crate::pursuits::render::{pursuit_list, pursuit_overlay};

/// Body overflow value while the overlay is open.
pub const SCROLL_LOCKED: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct DocumentState {
    body_overflow: Option<String>,
    keydown_listeners: Vec<ListenerId>,
    next_listener: u64,
}

/// The page-level state the widget borrows while open. Single-threaded.
#[derive(Debug, Clone, Default)]
pub struct Document(Rc<RefCell<DocumentState>>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_overflow(value: &str) -> Self {
        let doc = Self::new();
        doc.0.borrow_mut().body_overflow = Some(value.to_string());
        doc
    }

    pub fn body_overflow(&self) -> Option<String> {
        self.0.borrow().body_overflow.clone()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.0.borrow().body_overflow.as_deref() == Some(SCROLL_LOCKED)
    }

    pub fn keydown_listener_count(&self) -> usize {
        self.0.borrow().keydown_listeners.len()
    }

    fn replace_body_overflow(&self, value: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.0.borrow_mut().body_overflow, value)
    }

    fn add_keydown_listener(&self) -> ListenerId {
        let mut state = self.0.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.keydown_listeners.push(id);
        id
    }

    fn remove_keydown_listener(&self, id: ListenerId) {
        self.0.borrow_mut().keydown_listeners.retain(|l| *l != id);
    }
}

/// Sets the body overflow to `hidden` and puts the previous value back on drop.
struct ScrollLock {
    doc: Document,
    original: Option<String>,
}

impl ScrollLock {
    fn acquire(doc: &Document) -> Self {
        let original = doc.replace_body_overflow(Some(SCROLL_LOCKED.to_string()));
        Self {
            doc: doc.clone(),
            original,
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.doc.replace_body_overflow(self.original.take());
    }
}

struct KeydownListener {
    doc: Document,
    id: ListenerId,
}

impl KeydownListener {
    fn register(doc: &Document) -> Self {
        Self {
            doc: doc.clone(),
            id: doc.add_keydown_listener(),
        }
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        self.doc.remove_keydown_listener(self.id);
    }
}

/// Resources held for exactly as long as the overlay is visible.
struct Overlay {
    _scroll: ScrollLock,
    _keydown: KeydownListener,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Select(String),
    BackdropClick,
    CloseButton,
    KeyDown(Key),
}

pub struct PursuitsWidget<'p> {
    items: &'p [Pursuit],
    doc: Document,
    active: Option<usize>,
    overlay: Option<Overlay>,
}

impl<'p> PursuitsWidget<'p> {
    pub fn new(items: &'p [Pursuit], doc: &Document) -> Self {
        Self {
            items,
            doc: doc.clone(),
            active: None,
            overlay: None,
        }
    }

    pub fn active(&self) -> Option<&'p Pursuit> {
        self.active.map(|i| &self.items[i])
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Opens the overlay on `id`, or swaps the entry if it is already open.
    /// Returns false and leaves the state untouched for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        let Some((index, _)) = find_pursuit(self.items, id) else {
            tracing::debug!("No pursuit with id {id:?}");
            return false;
        };
        self.active = Some(index);
        if self.overlay.is_none() {
            self.overlay = Some(Overlay {
                _scroll: ScrollLock::acquire(&self.doc),
                _keydown: KeydownListener::register(&self.doc),
            });
        }
        true
    }

    pub fn dismiss(&mut self) {
        self.active = None;
        self.overlay = None;
    }

    pub fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Select(id) => {
                self.select(&id);
            }
            WidgetEvent::BackdropClick | WidgetEvent::CloseButton => self.dismiss(),
            // Only reachable while the listener is registered.
            WidgetEvent::KeyDown(Key::Escape) if self.overlay.is_some() => self.dismiss(),
            WidgetEvent::KeyDown(_) => {}
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            (pursuit_list(self.items))
            @if let Some(active) = self.active() {
                (pursuit_overlay(active))
            }
        }
    }
}
