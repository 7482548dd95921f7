//! Typewriter animation for the hero headline.
//!
//! [`Typewriter`] is the pure state machine; [`TypewriterRun`] drives it with a [`Scheduler`]
//! and keeps exactly one pending timer. Dropping the run cancels that timer, and the timer
//! callback only holds a weak reference, so nothing fires into a dead run.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub const DEFAULT_TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_DELETE_INTERVAL: Duration = Duration::from_millis(50);
pub const DEFAULT_PAUSE_BEFORE_DELETE: Duration = Duration::from_millis(2_000);
pub const DEFAULT_PAUSE_BEFORE_RETYPE: Duration = Duration::ZERO;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub pause_before_delete: Duration,
    /// Zero restarts typing on the next typing tick.
    pub pause_before_retype: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: DEFAULT_TYPE_INTERVAL,
            delete_interval: DEFAULT_DELETE_INTERVAL,
            pause_before_delete: DEFAULT_PAUSE_BEFORE_DELETE,
            pause_before_retype: DEFAULT_PAUSE_BEFORE_RETYPE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    target: String,
    // byte offset of every char boundary, so slicing never splits a code point
    boundaries: Vec<usize>,
    index: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(target: impl Into<String>, timing: TypewriterTiming) -> Self {
        let target = target.into();
        let boundaries = target
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(target.len()))
            .collect();

        Self {
            target,
            boundaries,
            index: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    pub fn displayed_text(&self) -> &str {
        &self.target[..self.boundaries[self.index]]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Delay before the first call to [`Typewriter::advance`].
    pub fn first_delay(&self) -> Duration {
        self.timing.type_interval
    }

    fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Applies one step and returns how long to wait before the next one.
    pub fn advance(&mut self) -> Duration {
        let timing = self.timing;
        let full = self.char_len();

        match self.phase {
            Phase::Typing => {
                if self.index < full {
                    self.index += 1;
                }
                if self.index == full {
                    self.phase = Phase::PausedAtFull;
                    return timing.pause_before_delete;
                }
                timing.type_interval
            }
            Phase::PausedAtFull => {
                self.phase = Phase::Deleting;
                timing.delete_interval
            }
            Phase::Deleting => {
                self.index = self.index.saturating_sub(1);
                if self.index > 0 {
                    return timing.delete_interval;
                }
                if timing.pause_before_retype.is_zero() {
                    self.phase = Phase::Typing;
                    return timing.type_interval;
                }
                self.phase = Phase::PausedAtEmpty;
                timing.pause_before_retype
            }
            Phase::PausedAtEmpty => {
                self.phase = Phase::Typing;
                timing.type_interval
            }
        }
    }
}

/// One-shot delayed callbacks. Dropping a returned timer cancels it if it has not fired.
pub trait Scheduler {
    type Timer;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer;
}

struct RunState<S: Scheduler> {
    machine: Typewriter,
    scheduler: S,
    timer: Option<S::Timer>,
    on_frame: Rc<dyn Fn(&str)>,
}

pub struct TypewriterRun<S: Scheduler> {
    state: Rc<RefCell<RunState<S>>>,
}

impl<S> TypewriterRun<S>
where
    S: Scheduler + 'static,
{
    /// Publishes the (empty) initial text and arms the first tick.
    pub fn start(machine: Typewriter, scheduler: S, on_frame: impl Fn(&str) + 'static) -> Self {
        let on_frame: Rc<dyn Fn(&str)> = Rc::new(on_frame);
        on_frame(machine.displayed_text());

        let delay = machine.first_delay();
        let state = Rc::new(RefCell::new(RunState {
            machine,
            scheduler,
            timer: None,
            on_frame,
        }));
        arm(&state, delay);

        Self { state }
    }

    pub fn displayed_text(&self) -> String {
        self.state.borrow().machine.displayed_text().to_string()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().machine.phase()
    }
}

fn arm<S>(state: &Rc<RefCell<RunState<S>>>, delay: Duration)
where
    S: Scheduler + 'static,
{
    let weak = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    // cancel before scheduling so two timers are never live at once
    guard.timer = None;
    let timer = guard
        .scheduler
        .schedule(delay, Box::new(move || tick(&weak)));
    guard.timer = Some(timer);
}

fn tick<S>(weak: &Weak<RefCell<RunState<S>>>)
where
    S: Scheduler + 'static,
{
    let Some(state) = weak.upgrade() else {
        return;
    };

    let (delay, changed, on_frame) = {
        let mut guard = state.borrow_mut();
        let before = guard.machine.displayed_text().len();
        let delay = guard.machine.advance();
        let text = guard.machine.displayed_text();
        let changed = (text.len() != before).then(|| text.to_string());
        (delay, changed, guard.on_frame.clone())
    };

    if let Some(text) = changed {
        on_frame(&text);
    }

    arm(&state, delay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const HEADLINE: &str = "> Senior Software Engineer_";

    struct Pending {
        id: u64,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Deterministic scheduler: time only moves when a test fires the next timer.
    #[derive(Clone, Default)]
    struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    struct ManualTimer {
        id: u64,
        clock: Weak<RefCell<ClockState>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().pending.retain(|entry| entry.id != self.id);
            }
        }
    }

    impl Scheduler for ManualClock {
        type Timer = ManualTimer;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTimer {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            let due = state.now + delay;
            state.pending.push(Pending { id, due, callback });
            ManualTimer {
                id,
                clock: Rc::downgrade(&self.state),
            }
        }
    }

    impl ManualClock {
        fn live_timers(&self) -> usize {
            self.state.borrow().pending.len()
        }

        /// Fires the earliest timer and returns the delay that elapsed, if any was pending.
        fn fire_next(&self) -> Option<Duration> {
            let (elapsed, callback) = {
                let mut state = self.state.borrow_mut();
                let position = state
                    .pending
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(position, _)| position)?;
                let entry = state.pending.remove(position);
                let elapsed = entry.due - state.now;
                state.now = entry.due;
                (elapsed, entry.callback)
            };
            callback();
            Some(elapsed)
        }
    }

    fn frames() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |text: &str| sink.borrow_mut().push(text.to_string()))
    }

    #[test]
    fn headline_is_twenty_seven_chars() {
        assert_eq!(HEADLINE.chars().count(), 27);
    }

    #[test]
    fn starts_typing_with_empty_prefix() {
        let machine = Typewriter::new(HEADLINE, TypewriterTiming::default());

        assert_eq!(machine.displayed_text(), "");
        assert_eq!(machine.phase(), Phase::Typing);
        assert!(!machine.is_deleting());
        assert_eq!(machine.first_delay(), DEFAULT_TYPE_INTERVAL);
    }

    #[test]
    fn full_cycle_types_pauses_deletes_and_restarts() {
        let mut machine = Typewriter::new(HEADLINE, TypewriterTiming::default());
        let len = HEADLINE.chars().count();

        for tick in 1..len {
            assert_eq!(machine.advance(), DEFAULT_TYPE_INTERVAL, "tick {tick}");
        }
        assert_eq!(machine.advance(), DEFAULT_PAUSE_BEFORE_DELETE);
        assert_eq!(machine.displayed_text(), HEADLINE);
        assert_eq!(machine.phase(), Phase::PausedAtFull);
        assert!(!machine.is_deleting());

        assert_eq!(machine.advance(), DEFAULT_DELETE_INTERVAL);
        assert_eq!(machine.displayed_text(), HEADLINE);
        assert!(machine.is_deleting());

        for _ in 1..len {
            assert_eq!(machine.advance(), DEFAULT_DELETE_INTERVAL);
        }
        assert_eq!(machine.advance(), DEFAULT_TYPE_INTERVAL);
        assert_eq!(machine.displayed_text(), "");
        assert_eq!(machine.phase(), Phase::Typing);

        machine.advance();
        assert_eq!(machine.displayed_text(), ">");
    }

    #[test]
    fn every_tick_moves_the_prefix_by_one_char() {
        let mut machine = Typewriter::new(HEADLINE, TypewriterTiming::default());
        let mut previous = machine.displayed_text().chars().count();

        for _ in 0..200 {
            let was_typing = machine.phase() == Phase::Typing;
            let was_deleting = machine.phase() == Phase::Deleting;
            machine.advance();
            let current = machine.displayed_text();
            let length = current.chars().count();

            assert!(HEADLINE.starts_with(current));
            if was_typing {
                assert_eq!(length, previous + 1);
            } else if was_deleting {
                assert_eq!(length + 1, previous);
            } else {
                assert_eq!(length, previous);
            }
            previous = length;
        }
    }

    #[test]
    fn multibyte_targets_are_sliced_on_char_boundaries() {
        let mut machine = Typewriter::new("ก้าว→", TypewriterTiming::default());

        machine.advance();
        assert_eq!(machine.displayed_text(), "ก");
        machine.advance();
        assert_eq!(machine.displayed_text(), "ก้");
    }

    #[test]
    fn empty_target_stays_empty() {
        let mut machine = Typewriter::new("", TypewriterTiming::default());

        for _ in 0..12 {
            machine.advance();
            assert_eq!(machine.displayed_text(), "");
        }
    }

    #[test]
    fn retype_pause_goes_through_paused_at_empty() {
        let timing = TypewriterTiming {
            pause_before_retype: Duration::from_millis(500),
            ..TypewriterTiming::default()
        };
        let mut machine = Typewriter::new("ab", timing);

        machine.advance();
        machine.advance();
        machine.advance();
        machine.advance();
        assert_eq!(machine.advance(), Duration::from_millis(500));
        assert_eq!(machine.phase(), Phase::PausedAtEmpty);
        assert_eq!(machine.displayed_text(), "");

        assert_eq!(machine.advance(), DEFAULT_TYPE_INTERVAL);
        assert_eq!(machine.phase(), Phase::Typing);
    }

    #[test]
    fn run_keeps_exactly_one_timer_live() {
        let clock = ManualClock::default();
        let (seen, on_frame) = frames();
        let run = TypewriterRun::start(
            Typewriter::new(HEADLINE, TypewriterTiming::default()),
            clock.clone(),
            on_frame,
        );

        for _ in 0..100 {
            assert_eq!(clock.live_timers(), 1);
            clock.fire_next();
        }

        assert_eq!(clock.live_timers(), 1);
        assert_eq!(seen.borrow().first().map(String::as_str), Some(""));
        assert!(HEADLINE.starts_with(&run.displayed_text()));
    }

    #[test]
    fn run_reaches_full_text_then_waits_for_the_pause() {
        let clock = ManualClock::default();
        let (seen, on_frame) = frames();
        let run = TypewriterRun::start(
            Typewriter::new(HEADLINE, TypewriterTiming::default()),
            clock.clone(),
            on_frame,
        );
        let len = HEADLINE.chars().count();

        for _ in 0..len {
            assert_eq!(clock.fire_next(), Some(DEFAULT_TYPE_INTERVAL));
        }
        assert_eq!(run.displayed_text(), HEADLINE);
        assert_eq!(run.phase(), Phase::PausedAtFull);

        assert_eq!(clock.fire_next(), Some(DEFAULT_PAUSE_BEFORE_DELETE));
        for _ in 0..len {
            assert_eq!(clock.fire_next(), Some(DEFAULT_DELETE_INTERVAL));
        }
        assert_eq!(run.displayed_text(), "");
        assert_eq!(run.phase(), Phase::Typing);

        // initial frame, one per typed char, one per deleted char
        assert_eq!(seen.borrow().len(), 1 + 2 * len);
    }

    #[test]
    fn dropping_the_run_cancels_its_timer() {
        let clock = ManualClock::default();
        let (seen, on_frame) = frames();
        let run = TypewriterRun::start(
            Typewriter::new(HEADLINE, TypewriterTiming::default()),
            clock.clone(),
            on_frame,
        );
        clock.fire_next();
        let frames_before = seen.borrow().len();

        drop(run);

        assert_eq!(clock.live_timers(), 0);
        assert_eq!(clock.fire_next(), None);
        assert_eq!(seen.borrow().len(), frames_before);
    }

    #[test]
    fn new_target_restarts_from_empty_without_stale_ticks() {
        let clock = ManualClock::default();
        let shown = Rc::new(RefCell::new(String::new()));
        let generation = Rc::new(Cell::new(0));

        let start = |target: &str| {
            generation.set(generation.get() + 1);
            let mine = generation.get();
            let shown = shown.clone();
            let generation = generation.clone();
            TypewriterRun::start(
                Typewriter::new(target, TypewriterTiming::default()),
                clock.clone(),
                move |text: &str| {
                    assert_eq!(generation.get(), mine, "stale run published a frame");
                    *shown.borrow_mut() = text.to_string();
                },
            )
        };

        let first = start(HEADLINE);
        for _ in 0..5 {
            clock.fire_next();
        }
        assert_eq!(*shown.borrow(), "> Sen");

        drop(first);
        let second = start("> Rust_");
        assert_eq!(*shown.borrow(), "");
        assert_eq!(second.phase(), Phase::Typing);
        assert_eq!(clock.live_timers(), 1);

        clock.fire_next();
        assert_eq!(*shown.borrow(), ">");
    }

    #[test]
    fn empty_target_run_never_publishes_text() {
        let clock = ManualClock::default();
        let (seen, on_frame) = frames();
        let _run = TypewriterRun::start(
            Typewriter::new("", TypewriterTiming::default()),
            clock.clone(),
            on_frame,
        );

        for _ in 0..20 {
            clock.fire_next();
        }

        assert_eq!(*seen.borrow(), vec![String::new()]);
    }
}
