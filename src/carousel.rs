use std::time::Duration;

/// Delay between snapping back to the rest offset and re-enabling the
/// slide transition.
pub const RELEASE_DELAY: Duration = Duration::from_millis(20);

/// Number of entries rendered around the active one on each side.
pub const WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Card width, gap and slide duration for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub item_width: f64,
    pub gap: f64,
    pub duration: Duration,
}

impl Metrics {
    pub fn for_viewport(width: f64) -> Self {
        let (item_width, gap, ms) = if !width.is_finite() || width > 1024.0 {
            (590.0, 100.0, 300)
        } else if width <= 320.0 {
            (280f64.min(width - 20.0), 10.0, 200)
        } else if width <= 480.0 {
            (290f64.min(width - 30.0), 12.0, 220)
        } else if width <= 768.0 {
            (300f64.min(width - 60.0), 15.0, 250)
        } else {
            (450f64.min(width - 80.0), 40.0, 280)
        };
        Self {
            item_width,
            gap,
            duration: Duration::from_millis(ms),
        }
    }

    pub fn step(&self) -> f64 {
        self.item_width + self.gap
    }
}

/// Index and slide bookkeeping for a cyclic list of cards.
///
/// A move runs in three steps driven by timers: [`Carousel::begin`] slides the
/// track, [`Carousel::settle`] snaps to the new index without a transition,
/// and [`Carousel::release`] turns transitions back on.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    active: usize,
    offset: f64,
    transition_enabled: bool,
    pending: Option<Direction>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: if len > 1 { 1 } else { 0 },
            offset: 0.0,
            transition_enabled: true,
            pending: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts sliding one card over. Returns how long the slide runs, or
    /// `None` when a move is already in flight or there is nothing to move to.
    pub fn begin(&mut self, direction: Direction, metrics: &Metrics) -> Option<Duration> {
        if self.is_animating() || self.len <= 1 {
            return None;
        }
        self.pending = Some(direction);
        self.offset = match direction {
            Direction::Next => -metrics.step(),
            Direction::Prev => metrics.step(),
        };
        Some(metrics.duration)
    }

    /// Commits the pending move and snaps the track back to rest.
    pub fn settle(&mut self) -> Duration {
        if let Some(direction) = self.pending {
            self.transition_enabled = false;
            self.active = match direction {
                Direction::Next => (self.active + 1) % self.len,
                Direction::Prev => (self.active + self.len - 1) % self.len,
            };
            self.offset = 0.0;
        }
        RELEASE_DELAY
    }

    pub fn release(&mut self) {
        self.transition_enabled = true;
        self.pending = None;
    }

    /// Jumps straight to an entry, as the indicator dots do.
    pub fn select(&mut self, index: usize) {
        if !self.is_animating() && index < self.len {
            self.active = index;
        }
    }

    /// The entries to render: two before the active one, the active one and
    /// two after it, wrapping around the list.
    pub fn visible(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..=2 * WINDOW_RADIUS)
            .map(|i| (self.active + i + self.len * WINDOW_RADIUS - WINDOW_RADIUS) % self.len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> Metrics {
        Metrics::for_viewport(1440.0)
    }

    fn step(carousel: &mut Carousel, direction: Direction) {
        carousel.begin(direction, &desktop()).expect("should start");
        carousel.settle();
        carousel.release();
    }

    #[test]
    fn test_metrics_table() {
        assert_eq!(
            Metrics::for_viewport(300.0),
            Metrics {
                item_width: 280.0,
                gap: 10.0,
                duration: Duration::from_millis(200)
            }
        );
        assert_eq!(Metrics::for_viewport(310.0).item_width, 280.0);
        assert_eq!(Metrics::for_viewport(400.0).item_width, 290.0);
        assert_eq!(Metrics::for_viewport(340.0).item_width, 290.0);
        assert_eq!(Metrics::for_viewport(700.0).gap, 15.0);
        assert_eq!(Metrics::for_viewport(1000.0).item_width, 450.0);
        assert_eq!(
            Metrics::for_viewport(1000.0).duration,
            Duration::from_millis(280)
        );
        assert_eq!(desktop().step(), 690.0);
        assert_eq!(Metrics::for_viewport(f64::INFINITY), desktop());
    }

    #[test]
    fn test_next_advances_by_one_and_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.active(), 1);
        step(&mut carousel, Direction::Next);
        assert_eq!(carousel.active(), 2);
        step(&mut carousel, Direction::Next);
        assert_eq!(carousel.active(), 0);
        step(&mut carousel, Direction::Prev);
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_navigation_ignored_while_animating() {
        let mut carousel = Carousel::new(3);
        let metrics = desktop();
        assert_eq!(
            carousel.begin(Direction::Next, &metrics),
            Some(Duration::from_millis(300))
        );
        assert_eq!(carousel.offset(), -690.0);
        assert!(carousel.is_animating());

        assert_eq!(carousel.begin(Direction::Next, &metrics), None);
        assert_eq!(carousel.begin(Direction::Prev, &metrics), None);
        assert_eq!(carousel.offset(), -690.0);

        assert_eq!(carousel.settle(), RELEASE_DELAY);
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.transition_enabled());
        // still guarded until transitions are back on
        assert_eq!(carousel.begin(Direction::Next, &metrics), None);

        carousel.release();
        assert!(carousel.transition_enabled());
        assert!(!carousel.is_animating());
        assert!(carousel.begin(Direction::Prev, &metrics).is_some());
        assert_eq!(carousel.offset(), 690.0);
    }

    #[test]
    fn test_single_entry_never_moves() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.active(), 0);
        assert_eq!(carousel.begin(Direction::Next, &desktop()), None);
        assert_eq!(carousel.visible(), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_visible_window_wraps() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.visible(), vec![2, 0, 1, 2, 0]);

        let mut carousel = Carousel::new(6);
        carousel.select(0);
        assert_eq!(carousel.visible(), vec![4, 5, 0, 1, 2]);
        carousel.select(5);
        assert_eq!(carousel.visible(), vec![3, 4, 5, 0, 1]);

        assert!(Carousel::new(0).visible().is_empty());
    }
}
