use crate::error::PageError;

/// Clickable parts of the page the controller cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A gallery thumbnail, by its `data-index`.
    GalleryItem(usize),
    LightboxClose,
    LightboxPrev,
    LightboxNext,
    /// The overlay itself rather than anything inside it.
    LightboxBackdrop,
    /// A navigation link, with its raw `href`.
    Anchor(String),
}

/// Host events, already reduced to the data the handlers need.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll,
    Key(String),
    Click(ClickTarget),
    TouchStart(f64),
    TouchEnd(f64),
    /// The window finished loading.
    Load,
    /// One-shot check shortly after start-up.
    RevealTimer,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Scroll => EventKind::Scroll,
            PageEvent::Key(_) => EventKind::Key,
            PageEvent::Click(_) => EventKind::Click,
            PageEvent::TouchStart(_) => EventKind::TouchStart,
            PageEvent::TouchEnd(_) => EventKind::TouchEnd,
            PageEvent::Load => EventKind::Load,
            PageEvent::RevealTimer => EventKind::RevealTimer,
        }
    }
}

/// The capabilities an event source has to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Key,
    Click,
    TouchStart,
    TouchEnd,
    Load,
    RevealTimer,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Scroll,
        EventKind::Click,
        EventKind::Key,
        EventKind::TouchStart,
        EventKind::TouchEnd,
        EventKind::Load,
        EventKind::RevealTimer,
    ];
}

/// What the host should do with the native event after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    PreventDefault,
}

pub type Handler = Box<dyn FnMut(PageEvent) -> EventOutcome>;

/// Something that can deliver page events to registered handlers.
///
/// Handlers for the same kind run in the order they were subscribed.
pub trait EventSource {
    fn subscribe(&mut self, kind: EventKind, handler: Handler) -> Result<(), PageError>;
}
