//! Interactive terminal widget.

mod input;
mod widget;

use std::io::{self, Write};

use log::info;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::{Instant, sleep_until};

pub use input::{Action, action};
pub use widget::{App, Effect};

use crate::clipboard::SystemClipboard;
use crate::entropy;
use crate::error::Result;
use crate::reveal::{Animation, Frame, RunToken};
use crate::settings::Settings;
use crate::terminal::RawModeGuard;

/// Run the widget until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    let mut app = App::new(settings);
    let mut clipboard = SystemClipboard::new();
    let mut rng = entropy::system();

    let mut guard = RawModeGuard::new()?;
    let mut out = io::stdout();

    let (key_tx, mut keys) = mpsc::unbounded_channel();
    input::spawn_reader(key_tx);
    let (frame_tx, mut frames) = mpsc::unbounded_channel::<(RunToken, Frame)>();

    info!("widget started");
    loop {
        app.render(&mut out)?;
        out.flush()?;

        let deadline = app.toasts().deadline();
        tokio::select! {
            key = keys.recv() => {
                let Some(key) = key else { break };
                let Some(action) = input::action(key) else { continue };
                match app.apply(action, &mut rng, &mut clipboard) {
                    Effect::Quit => break,
                    Effect::Reveal(animation) => spawn_reveal(animation, frame_tx.clone()),
                    Effect::None => {}
                }
            }
            Some((token, frame)) = frames.recv() => app.on_frame(&token, frame),
            _ = toast_expiry(deadline) => {
                app.expire_toast(Instant::now());
            }
        }
    }

    guard.restore();
    info!("widget closed");
    Ok(())
}

fn spawn_reveal(animation: Animation, tx: UnboundedSender<(RunToken, Frame)>) {
    tokio::spawn(async move {
        let mut rng = entropy::system();
        animation
            .run(&mut rng, |token, frame| {
                let _ = tx.send((token.clone(), frame));
            })
            .await
    });
}

async fn toast_expiry(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
