//! Speed Racer entry point
//!
//! Headless runner: plays sessions with the autopilot (title -> race -> game
//! over -> restart), settles the personal best after each run and prints the
//! game-over summary. Rendering lives in a separate front end.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use speed_racer::autopilot::Autopilot;
    use speed_racer::consts::FRAME_DT;
    use speed_racer::persistence::file::DEFAULT_BEST_PATH;
    use speed_racer::persistence::{BestScoreStore, FileBestStore};
    use speed_racer::sim::{FrameInput, SessionState, advance_frame};
    use speed_racer::{Tuning, settle_run};

    #[derive(Debug, Parser)]
    #[command(name = "speed-racer", about = "Headless Speed Racer sessions")]
    struct Args {
        /// Number of sessions to play back to back
        #[arg(long, default_value_t = 1)]
        runs: u32,

        /// Seed for the first session (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON tuning file overriding the default balance
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Personal best record
        #[arg(long, default_value = DEFAULT_BEST_PATH)]
        best_file: PathBuf,

        /// Stop a session after this many frames even if the car survives
        #[arg(long, default_value_t = 60 * 60 * 10)]
        max_frames: u64,

        /// Drive without the autopilot (no lane changes)
        #[arg(long)]
        idle: bool,

        /// Print one JSON snapshot per frame to stdout
        #[arg(long)]
        trace: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };

        let mut store = FileBestStore::open(&args.best_file);
        log::info!(
            "Speed Racer starting: personal best {} ({})",
            store.read(),
            args.best_file.display()
        );

        let pilot = Autopilot::default();
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        let seed = args.seed.unwrap_or_else(rand::random);
        let mut session = SessionState::new(seed, tuning)?;

        for run in 1..=args.runs {
            session.start();
            let mut snapshot = session.snapshot();

            while session.is_running() && session.pace() < args.max_frames {
                let input = if args.idle {
                    FrameInput::idle()
                } else {
                    pilot.decide(&snapshot)
                };
                let result = advance_frame(&mut session, &input);
                if args.trace {
                    serde_json::to_writer(&mut out, &result.snapshot)?;
                    writeln!(out)?;
                }
                snapshot = result.snapshot;
            }

            let score = session.final_score().unwrap_or(session.score);
            if !session.is_ended() {
                log::info!("Run {} reached the frame limit ({})", run, args.max_frames);
            }

            let summary = settle_run(&mut store, score);
            writeln!(
                out,
                "Run {} (seed {}): {} frames ({:.1}s), {} dodged. {}",
                run,
                session.seed,
                session.pace(),
                session.pace() as f32 * FRAME_DT,
                session.cleared,
                summary
            )?;
            if let Some(e) = &summary.write_error {
                writeln!(out, "Warning: personal best not saved: {}", e)?;
            }

            session = session.next_session();
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives the library directly
}
