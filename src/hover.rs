//! Pointer tracking for the card highlight.
//!
//! A [`HoverSession`] owns the listeners it registers on a [`PointerSurface`]; dropping the
//! session is the only way to stop tracking, so a detached card can never be updated by a
//! late event.

use std::cell::RefCell;
use std::rc::Rc;

const HIGHLIGHT_RGB: (u8, u8, u8) = (0, 255, 65);

/// Large, faint wash painted on the card background.
pub const CARD_WASH: Highlight = Highlight {
    radius_px: 600,
    alpha: 0.08,
    fade_percent: 40,
};

/// Tighter, brighter spot painted in an overlay above the wash.
pub const CARD_SPOT: Highlight = Highlight {
    radius_px: 400,
    alpha: 0.15,
    fade_percent: 50,
};

/// Contact cards only get an overlay, so it is both wide and bright.
pub const CONTACT_SPOT: Highlight = Highlight {
    radius_px: 600,
    alpha: 0.15,
    fade_percent: 40,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub is_hovering: bool,
}

impl PointerPosition {
    pub const fn idle() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            is_hovering: false,
        }
    }
}

/// Container rectangle in viewport coordinates, sampled when an event arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Move {
        bounds: Bounds,
        client_x: f64,
        client_y: f64,
    },
    Leave,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    position: PointerPosition,
}

impl PointerTracker {
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Returns the new position when the signal changed it.
    pub fn apply(&mut self, signal: PointerSignal) -> Option<PointerPosition> {
        let next = match signal {
            PointerSignal::Move {
                bounds,
                client_x,
                client_y,
            } if bounds.contains(client_x, client_y) => PointerPosition {
                x: client_x - bounds.left,
                y: client_y - bounds.top,
                is_hovering: true,
            },
            // a move that lands outside the box (overflowing child) counts as leaving
            PointerSignal::Move { .. } | PointerSignal::Leave => PointerPosition::idle(),
        };

        if next == self.position {
            return None;
        }

        self.position = next;
        Some(next)
    }
}

/// Something that can deliver pointer move/leave notifications for one container.
///
/// The returned subscription must remove every listener it registered when dropped.
pub trait PointerSurface {
    type Subscription;
    type Error;

    fn subscribe(
        &self,
        handler: Rc<dyn Fn(PointerSignal)>,
    ) -> Result<Self::Subscription, Self::Error>;
}

pub struct HoverSession<S> {
    tracker: Rc<RefCell<PointerTracker>>,
    _subscription: S,
}

impl<S> HoverSession<S> {
    pub fn position(&self) -> PointerPosition {
        self.tracker.borrow().position()
    }
}

/// Starts tracking `surface`, calling `on_change` whenever the position changes.
pub fn track_pointer<P>(
    surface: &P,
    on_change: impl Fn(PointerPosition) + 'static,
) -> Result<HoverSession<P::Subscription>, P::Error>
where
    P: PointerSurface,
{
    let tracker = Rc::new(RefCell::new(PointerTracker::default()));
    let handler: Rc<dyn Fn(PointerSignal)> = {
        let tracker = tracker.clone();
        Rc::new(move |signal| {
            let changed = tracker.borrow_mut().apply(signal);
            if let Some(next) = changed {
                on_change(next);
            }
        })
    };

    let subscription = surface.subscribe(handler)?;

    Ok(HoverSession {
        tracker,
        _subscription: subscription,
    })
}

/// Strength and reach of one radial highlight layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub radius_px: u32,
    pub alpha: f32,
    pub fade_percent: u8,
}

impl Highlight {
    /// CSS background for this layer, or `None` while the pointer is elsewhere.
    pub fn gradient(self, position: PointerPosition) -> Option<String> {
        if !position.is_hovering {
            return None;
        }

        let (r, g, b) = HIGHLIGHT_RGB;
        Some(format!(
            "radial-gradient({}px circle at {}px {}px, rgba({r}, {g}, {b}, {}), transparent {}%)",
            self.radius_px, position.x, position.y, self.alpha, self.fade_percent
        ))
    }
}
