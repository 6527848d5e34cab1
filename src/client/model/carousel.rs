//! Slide index arithmetic for the featured carousel.

/// Current slide of a carousel over `len` slides.
///
/// All movement wraps around: stepping past the last slide returns to the first and
/// stepping back from the first lands on the last. With zero slides the index stays 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`, clamped into range.
    pub fn go_to(self, index: usize) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: index.min(self.len - 1),
            ..self
        }
    }

    /// Timer tick for a countdown that started while slide `started_at` was showing.
    ///
    /// Advances only if nobody moved the carousel since; otherwise the tick is stale
    /// and the state is returned unchanged.
    pub fn auto_advance(self, started_at: usize) -> Self {
        if self.index == started_at {
            self.next()
        } else {
            self
        }
    }

    /// Label shown on the active slide, e.g. `2/6`.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn auto_advance_moves_to_next_slide() {
        let state = CarouselState::new(3).go_to(1);

        assert_eq!(state.auto_advance(1).index(), 2);
    }

    #[test]
    fn auto_advance_after_manual_move_is_ignored() {
        // countdown began on slide 0, the reader then clicked to slide 2
        let state = CarouselState::new(4).go_to(2);

        assert_eq!(state.auto_advance(0), state);
    }

    #[test]
    fn wraps_forward_from_last_slide() {
        let state = CarouselState::new(3).go_to(2);

        assert_eq!(state.next().index(), 0);
    }

    #[test]
    fn wraps_backward_from_first_slide() {
        let state = CarouselState::new(3);

        assert_eq!(state.prev().index(), 2);
        assert_eq!(state.prev().position_label(), "3/3");
    }

    #[test]
    fn empty_carousel_stays_put() {
        let state = CarouselState::new(0);

        assert_eq!(state.next().index(), 0);
        assert_eq!(state.prev().index(), 0);
        assert_eq!(state.go_to(4).index(), 0);
    }

    #[derive(Debug, Clone)]
    enum Step {
        Next,
        Prev,
        GoTo(usize),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Next),
            Just(Step::Prev),
            (0usize..20).prop_map(Step::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..12, steps in proptest::collection::vec(step(), 0..64)) {
            let mut state = CarouselState::new(len);

            for step in steps {
                state = match step {
                    Step::Next => state.next(),
                    Step::Prev => state.prev(),
                    Step::GoTo(i) => state.go_to(i),
                };
                prop_assert!(state.index() < len);
            }
        }

        #[test]
        fn next_then_prev_returns_to_start(len in 1usize..12, start in 0usize..12) {
            let state = CarouselState::new(len).go_to(start);

            prop_assert_eq!(state.next().prev(), state);
            prop_assert_eq!(state.prev().next(), state);
        }

        #[test]
        fn full_cycle_returns_to_start(len in 1usize..12, start in 0usize..12) {
            let state = CarouselState::new(len).go_to(start);
            let mut moved = state;
            for _ in 0..len {
                moved = moved.next();
            }

            prop_assert_eq!(moved, state);
        }
    }
}
