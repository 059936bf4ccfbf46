//! Timed, cancellable reveal runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use tokio::time::sleep;

use super::frame::{Frame, Reveal};
use crate::entropy::Entropy;

/// Hands out run tokens. Starting a run invalidates every earlier token.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    current: Arc<AtomicU64>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RunToken {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RunToken {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidate the in-flight run without starting a new one.
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct RunToken {
    id: u64,
    current: Arc<AtomicU64>,
}

impl RunToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// A prepared reveal for one password.
#[derive(Debug, Clone)]
pub struct Animation {
    token: RunToken,
    reveal: Reveal,
    step_delay: Duration,
}

impl Animation {
    pub fn new(token: RunToken, password: &str, mask: char, step_delay: Duration) -> Self {
        Self {
            token,
            reveal: Reveal::new(password.chars().count(), mask),
            step_delay,
        }
    }

    pub fn token(&self) -> &RunToken {
        &self.token
    }

    /// Emit every frame in order, sleeping `step_delay` between frames.
    ///
    /// The token is checked before each frame is emitted and before each
    /// sleep, so a superseded run stops without producing anything further.
    pub async fn run<E, F>(mut self, rng: &mut E, mut on_frame: F) -> Outcome
    where
        E: Entropy,
        F: FnMut(&RunToken, Frame),
    {
        loop {
            if !self.token.is_current() {
                debug!("reveal run {} cancelled", self.token.id);
                return Outcome::Cancelled;
            }
            let Some(frame) = self.reveal.next_frame(rng) else {
                return Outcome::Completed;
            };
            on_frame(&self.token, frame);
            if self.reveal.is_finished() {
                debug!("reveal run {} completed", self.token.id);
                return Outcome::Completed;
            }
            if !self.token.is_current() {
                debug!("reveal run {} cancelled", self.token.id);
                return Outcome::Cancelled;
            }
            sleep(self.step_delay).await;
        }
    }
}

/// Reveal `password` under a fresh run from `animator`.
pub async fn animate<E, F>(
    animator: &Animator,
    password: &str,
    mask: char,
    step_delay: Duration,
    rng: &mut E,
    on_frame: F,
) -> Outcome
where
    E: Entropy,
    F: FnMut(&RunToken, Frame),
{
    Animation::new(animator.begin(), password, mask, step_delay)
        .run(rng, on_frame)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn emits_every_frame_with_delays() {
        let animator = Animator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut frames = Vec::new();
        let start = Instant::now();

        let outcome = animate(
            &animator,
            "ab",
            '*',
            Duration::from_millis(10),
            &mut rng,
            |_, frame| frames.push(frame),
        )
        .await;

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(frames.len(), 3);
        let masked: Vec<_> = frames.iter().map(Frame::masked).collect();
        assert_eq!(masked, vec![0, 1, 2]);
        assert_eq!(frames[2].text(), "**");
        assert_eq!(start.elapsed(), Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn second_run_silences_the_first() {
        let animator = Animator::new();
        let seen: Arc<Mutex<Vec<(u64, usize)>>> = Arc::default();

        let first = {
            let animator = animator.clone();
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                let mut rng = ChaCha8Rng::seed_from_u64(2);
                animate(
                    &animator,
                    "abcdefgh",
                    '*',
                    Duration::from_millis(10),
                    &mut rng,
                    |token, frame| seen.lock().unwrap().push((token.id(), frame.masked())),
                )
                .await
            })
        };

        sleep(Duration::from_millis(25)).await;
        let token = animator.begin();
        let before = seen.lock().unwrap().len();
        assert_eq!(before, 3);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let second = Animation::new(token, "xyz", '*', Duration::from_millis(10))
            .run(&mut rng, |token, frame| {
                seen.lock().unwrap().push((token.id(), frame.masked()))
            })
            .await;

        assert_eq!(first.await.unwrap(), Outcome::Cancelled);
        assert_eq!(second, Outcome::Completed);

        let seen = seen.lock().unwrap();
        let first_run: Vec<_> = seen.iter().filter(|(id, _)| *id == 1).collect();
        assert_eq!(first_run.len(), before);
        let second_run: Vec<_> = seen.iter().filter(|(id, _)| *id == 2).map(|(_, m)| *m).collect();
        assert_eq!(second_run, vec![0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_from_frame_callback_skips_the_next_sleep() {
        let animator = Animator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut frames = 0;
        let start = Instant::now();

        let outcome = animate(
            &animator,
            "abcd",
            '*',
            Duration::from_secs(60),
            &mut rng,
            |_, _| {
                frames += 1;
                animator.cancel();
            },
        )
        .await;

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(frames, 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn cancel_invalidates_without_new_run() {
        let animator = Animator::new();
        let token = animator.begin();
        assert!(token.is_current());
        animator.cancel();
        assert!(!token.is_current());
    }
}
