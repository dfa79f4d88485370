use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;

/// Timing of a word cycle: every `interval_ms` the current word starts
/// leaving, and `transition_ms` later the next word takes its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCycle {
    pub len: usize,
    pub interval_ms: u32,
    pub transition_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub index: usize,
    pub transitioning: bool,
}

impl WordCycle {
    /// What is on screen `elapsed_ms` after mount. `None` for an empty list.
    pub fn frame_at(&self, elapsed_ms: u64) -> Option<Frame> {
        if self.len == 0 || self.interval_ms == 0 {
            return None;
        }
        let interval = u64::from(self.interval_ms);
        let transition = u64::from(self.transition_ms.min(self.interval_ms));
        let ticks = elapsed_ms / interval;
        if ticks == 0 {
            return Some(Frame::default());
        }
        let since_tick = elapsed_ms - ticks * interval;
        let frame = if since_tick < transition {
            Frame { index: ((ticks - 1) % self.len as u64) as usize, transitioning: true }
        } else {
            Frame { index: (ticks % self.len as u64) as usize, transitioning: false }
        };
        Some(frame)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CycleState {
    len: usize,
    frame: Frame,
}

enum CycleAction {
    Leave,
    Advance,
    /// Word list length changed; start over from the first word.
    Restart(usize),
}

impl Reducible for CycleState {
    type Action = CycleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let frame = match action {
            CycleAction::Restart(len) if len == self.len => return self,
            CycleAction::Restart(len) => return Rc::new(Self { len, frame: Frame::default() }),
            _ if self.len == 0 => return self,
            CycleAction::Leave => Frame { transitioning: true, ..self.frame },
            CycleAction::Advance => Frame {
                index: (self.frame.index + 1) % self.len,
                transitioning: false,
            },
        };
        Rc::new(Self { len: self.len, frame })
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub words: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::WORD_INTERVAL_MS)]
    pub interval_ms: u32,
    #[prop_or(config::WORD_TRANSITION_MS)]
    pub transition_ms: u32,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let len = props.words.len();
    let cycle = WordCycle {
        len,
        interval_ms: props.interval_ms,
        transition_ms: props.transition_ms.min(props.interval_ms),
    };
    let state = use_reducer(|| CycleState {
        len,
        frame: cycle.frame_at(0).unwrap_or_default(),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |cycle: &WordCycle| {
                dispatcher.dispatch(CycleAction::Restart(cycle.len));

                // The pending swap is replaced on each tick and dropped with the interval.
                let swap: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let interval = (cycle.len > 1 && cycle.interval_ms > 0).then(|| {
                    let swap = swap.clone();
                    let transition_ms = cycle.transition_ms;
                    Interval::new(cycle.interval_ms, move || {
                        dispatcher.dispatch(CycleAction::Leave);
                        let dispatcher = dispatcher.clone();
                        *swap.borrow_mut() = Some(Timeout::new(transition_ms, move || {
                            dispatcher.dispatch(CycleAction::Advance);
                        }));
                    })
                });

                move || {
                    drop(interval);
                    swap.borrow_mut().take();
                }
            },
            cycle,
        );
    }

    let Some(word) = props.words.get(state.frame.index % len.max(1)) else {
        return html! {};
    };
    let motion = if state.frame.transitioning {
        "animated-text__word--leaving"
    } else {
        "animated-text__word--entering"
    };

    html! {
        <span class={classes!("animated-text", props.class.clone())}>
            <style>
                {r#"
                    .animated-text {
                        position: relative;
                        display: inline-block;
                    }
                    .animated-text__word {
                        display: block;
                        transition: transform 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55), opacity 0.5s;
                    }
                    .animated-text__word--entering {
                        transform: translateY(0);
                        opacity: 1;
                        animation: wordSlideIn 0.5s ease-out;
                    }
                    .animated-text__word--leaving {
                        transform: translateY(-100%);
                        opacity: 0;
                    }
                    @keyframes wordSlideIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <span key={state.frame.index.to_string()} class={classes!("animated-text__word", motion)}>
                {word.to_string()}
            </span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: WordCycle = WordCycle { len: 2, interval_ms: 3000, transition_ms: 500 };

    #[test]
    fn test_two_word_schedule() {
        let shown = |ms| AB.frame_at(ms).unwrap();
        assert_eq!(shown(0), Frame { index: 0, transitioning: false });
        assert_eq!(shown(2999), Frame { index: 0, transitioning: false });
        assert_eq!(shown(3000), Frame { index: 0, transitioning: true });
        assert_eq!(shown(3499), Frame { index: 0, transitioning: true });
        assert_eq!(shown(3500), Frame { index: 1, transitioning: false });
        assert_eq!(shown(5999), Frame { index: 1, transitioning: false });
        assert_eq!(shown(6000), Frame { index: 1, transitioning: true });
        assert_eq!(shown(6500), Frame { index: 0, transitioning: false });
    }

    #[test]
    fn test_cycles_indefinitely() {
        let cycle = WordCycle { len: 5, ..AB };
        for tick in 1..50u64 {
            let frame = cycle.frame_at(tick * 3000 + 500).unwrap();
            assert_eq!(frame.index, (tick % 5) as usize);
        }
    }

    #[test]
    fn test_empty_list_has_no_frames() {
        assert_eq!(WordCycle { len: 0, ..AB }.frame_at(10_000), None);
        assert_eq!(WordCycle { interval_ms: 0, ..AB }.frame_at(10_000), None);
    }

    #[test]
    fn test_reducer_matches_schedule() {
        let mut state = Rc::new(CycleState { len: 2, frame: Frame::default() });
        let mut elapsed = 0;
        for _ in 0..4 {
            elapsed += 3000;
            state = state.reduce(CycleAction::Leave);
            assert_eq!(Some(state.frame), AB.frame_at(elapsed));
            state = state.reduce(CycleAction::Advance);
            assert_eq!(Some(state.frame), AB.frame_at(elapsed + 500));
        }
    }

    #[test]
    fn test_restart_follows_new_length() {
        let state = Rc::new(CycleState { len: 5, frame: Frame { index: 4, transitioning: false } });
        let same = state.clone().reduce(CycleAction::Restart(5));
        assert!(Rc::ptr_eq(&state, &same));

        let shorter = state.reduce(CycleAction::Restart(2));
        assert_eq!(*shorter, CycleState { len: 2, frame: Frame::default() });
        let shorter = shorter.reduce(CycleAction::Leave).reduce(CycleAction::Advance);
        assert_eq!(shorter.frame.index, 1);
        let shorter = shorter.reduce(CycleAction::Advance);
        assert_eq!(shorter.frame.index, 0);
    }

    #[test]
    fn test_reducer_ignores_empty_list() {
        let state = Rc::new(CycleState { len: 0, frame: Frame::default() });
        let next = state.clone().reduce(CycleAction::Advance);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
