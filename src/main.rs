use std::io;

use anyhow::Result;
use tracing::info;

use handsfree_session::{ConsoleSpeaker, LineListener, Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("handsfree starting");

    let listener = LineListener::new(io::stdin().lock());
    let speaker = ConsoleSpeaker::new(io::stdout());
    let mut session = Session::new(listener, speaker, SessionConfig::default());
    let summary = session.run()?;

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "handsfree shutting down"
    );
    Ok(())
}
