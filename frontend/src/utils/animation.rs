use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Something that runs a callback once on the next frame. Dropping the
/// returned handle cancels the callback if it has not run yet.
pub trait FrameScheduler: Clone + 'static {
    type Handle: 'static;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

type FrameSlot<H> = Rc<RefCell<Option<H>>>;

/// A cancellable frame loop.
///
/// `start` schedules `step` every frame for as long as it returns `true`.
/// `stop` drops the pending handle, which cancels it. Clones share the same
/// slot, so any clone can stop the loop.
///
/// The pending frame keeps the loop alive on its own: a loop can be started
/// and dropped for one-shot animations that end themselves.
pub struct FrameDriver<S: FrameScheduler> {
    scheduler: S,
    slot: FrameSlot<S::Handle>,
}

pub type FrameLoop = FrameDriver<AnimationFrames>;

impl<S: FrameScheduler> Clone for FrameDriver<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<S: FrameScheduler + Default> Default for FrameDriver<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start<F>(&self, step: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        self.stop();
        schedule(
            self.scheduler.clone(),
            Rc::clone(&self.slot),
            Rc::new(RefCell::new(step)),
        );
    }

    pub fn stop(&self) {
        let pending = self.slot.borrow_mut().take();
        drop(pending);
    }
}

fn schedule<S, F>(scheduler: S, slot: FrameSlot<S::Handle>, step: Rc<RefCell<F>>)
where
    S: FrameScheduler,
    F: FnMut(f64) -> bool + 'static,
{
    let next = Rc::clone(&slot);
    let again = scheduler.clone();
    let handle = scheduler.request(Box::new(move |timestamp| {
        let fired = next.borrow_mut().take();
        drop(fired);
        let keep_going = (step.borrow_mut())(timestamp);
        if keep_going {
            schedule(again, next, step);
        }
    }));
    *slot.borrow_mut() = Some(handle);
}

/// Linear interpolation of a whole number, rounded like a price label.
pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    (from + (to - from) * progress.clamp(0.0, 1.0)).round()
}

/// A single numeric transition, clocked by frame timestamps.
///
/// The first sampled timestamp is the start time. A zero duration finishes on
/// the first sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
        }
    }

    /// Returns the value for `now` and whether the tween has finished.
    pub fn sample(&mut self, now: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let start = *self.started_at.get_or_insert(now);
        let progress = ((now - start) / self.duration_ms).min(1.0);
        (interpolate(self.from, self.to, progress), progress >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Pending = (Rc<Cell<bool>>, Box<dyn FnOnce(f64)>);

    /// Frames that only fire when the test says so.
    #[derive(Clone, Default)]
    struct ManualFrames {
        queue: Rc<RefCell<Vec<Pending>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push((Rc::clone(&cancelled), callback));
            ManualHandle(cancelled)
        }
    }

    impl ManualFrames {
        /// Runs every callback queued before this frame. Returns how many ran.
        fn tick(&self, now: f64) -> usize {
            let due: Vec<Pending> = self.queue.borrow_mut().drain(..).collect();
            let mut ran = 0;
            for (cancelled, callback) in due {
                if !cancelled.get() {
                    callback(now);
                    ran += 1;
                }
            }
            ran
        }
    }

    fn counting_loop(limit: usize) -> (ManualFrames, FrameDriver<ManualFrames>, Rc<Cell<usize>>) {
        let frames = ManualFrames::default();
        let driver = FrameDriver::new(frames.clone());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        driver.start(move |_| {
            counter.set(counter.get() + 1);
            counter.get() < limit
        });
        (frames, driver, calls)
    }

    #[test]
    fn runs_until_step_returns_false() {
        let (frames, _driver, calls) = counting_loop(3);
        for frame in 0..6 {
            frames.tick(frame as f64 * 16.0);
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let (frames, driver, calls) = counting_loop(usize::MAX);
        assert_eq!(frames.tick(0.0), 1);
        driver.stop();
        assert_eq!(frames.tick(16.0), 0);
        assert_eq!(frames.tick(32.0), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clone_can_stop_the_loop() {
        let (frames, driver, calls) = counting_loop(usize::MAX);
        driver.clone().stop();
        assert_eq!(frames.tick(0.0), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn restart_replaces_the_running_step() {
        let (frames, driver, first) = counting_loop(usize::MAX);
        let second = Rc::new(Cell::new(0));
        let counter = Rc::clone(&second);
        driver.start(move |_| {
            counter.set(counter.get() + 1);
            true
        });
        frames.tick(0.0);
        frames.tick(16.0);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn dropped_loop_keeps_running_until_done() {
        let (frames, driver, calls) = counting_loop(2);
        drop(driver);
        frames.tick(0.0);
        frames.tick(16.0);
        frames.tick(32.0);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn interpolate_rounds_and_clamps() {
        assert_eq!(interpolate(10.0, 20.0, 0.26), 13.0);
        assert_eq!(interpolate(10.0, 20.0, 1.7), 20.0);
        assert_eq!(interpolate(10.0, 20.0, -1.0), 10.0);
    }

    #[test]
    fn tween_runs_over_duration() {
        let mut tween = Tween::new(0.0, 100.0, 400.0);
        assert_eq!(tween.sample(1000.0), (0.0, false));
        assert_eq!(tween.sample(1200.0), (50.0, false));
        assert_eq!(tween.sample(1400.0), (100.0, true));
        assert_eq!(tween.sample(1500.0), (100.0, true));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(19.0, 190.0, 0.0);
        assert_eq!(tween.sample(5.0), (190.0, true));
    }
}
