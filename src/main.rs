//! Falling-word typing game runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a custom framebuffer-based renderer (no ratatui widgets/layout), plus a
//! line-oriented quiz mode that runs outside the raw terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_typer::core::rng::SimpleRng;
use tui_typer::core::{GameConfig, GameState};
use tui_typer::input::{map_key_event, Control, PlayerInput};
use tui_typer::progress::{default_progress_path, ProgressStore};
use tui_typer::quiz::{generate_questions, QuestionKind, QuizMode};
use tui_typer::term::{GameView, TerminalRenderer, Viewport};
use tui_typer::types::{
    AttemptEvent, Difficulty, Outcome, SessionSummary, DEFAULT_CANVAS_HEIGHT,
    DEFAULT_CANVAS_WIDTH, TICK_MS,
};
use tui_typer::vocab::{load_vocab_file, VocabTerm};

#[derive(Parser, Debug)]
#[command(name = "tui-typer", about = "Falling-word vocabulary typing game")]
struct Args {
    /// Vocabulary CSV file
    #[arg(long, default_value = "assets/vocab.csv")]
    vocab: PathBuf,

    /// Starting difficulty: easy, medium, hard or coding
    #[arg(long, default_value = "easy")]
    difficulty: String,

    /// Simulated canvas width
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: f32,

    /// Simulated canvas height
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: f32,

    /// RNG seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Run the multiple-choice quiz instead of the typing game:
    /// term, definition or mixed
    #[arg(long)]
    quiz: Option<String>,

    /// Skip loading and saving per-term progress
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let vocab = load_vocab_file(&args.vocab)
        .with_context(|| format!("loading vocabulary from {}", args.vocab.display()))?;

    let seed = match args.seed {
        Some(s) => s,
        None => clock_seed(),
    };

    if let Some(mode) = &args.quiz {
        let Some(mode) = QuizMode::from_str(mode) else {
            bail!("unknown quiz mode {:?} (use term, definition or mixed)", mode);
        };
        return run_quiz(&vocab, mode, seed, !args.no_progress);
    }

    let Some(difficulty) = Difficulty::from_str(&args.difficulty) else {
        bail!(
            "unknown difficulty {:?} (use easy, medium, hard or coding)",
            args.difficulty
        );
    };

    let config = GameConfig {
        canvas_width: args.width,
        canvas_height: args.height,
        difficulty,
        seed,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, vocab, config, !args.no_progress);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(summary) = &result {
        print_summary(summary);
    }
    result.map(|_| ())
}

fn run(
    term: &mut TerminalRenderer,
    vocab: Vec<VocabTerm>,
    config: GameConfig,
    persist: bool,
) -> Result<SessionSummary> {
    let mut game_state = GameState::new(vocab, config);
    game_state.start();

    let progress_path = if persist {
        default_progress_path().ok()
    } else {
        None
    };
    let mut progress = match &progress_path {
        Some(path) => ProgressStore::load_or_default(path),
        None => ProgressStore::default(),
    };

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match map_key_event(key) {
                        Some(PlayerInput::Control(Control::Quit)) => break,
                        Some(PlayerInput::Control(Control::CycleDifficulty)) => {
                            let next = game_state.difficulty().cycle();
                            game_state.set_difficulty(next);
                        }
                        Some(PlayerInput::Control(Control::Restart)) => {
                            if game_state.game_over() {
                                game_state.restart();
                            }
                        }
                        Some(PlayerInput::Type(key)) => {
                            game_state.handle_key(key);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let was_over = game_state.game_over();
            game_state.tick(TICK_MS);

            let wpm = game_state.words_per_minute();
            for attempt in game_state.take_attempts() {
                progress.record(&attempt, wpm);
            }

            // Persist on the game-over transition; failures never stop play.
            if !was_over && game_state.game_over() {
                if let Some(path) = &progress_path {
                    let _ = progress.save_atomic(path);
                }
            }
        }
    }

    let wpm = game_state.words_per_minute();
    for attempt in game_state.take_attempts() {
        progress.record(&attempt, wpm);
    }
    if let Some(path) = &progress_path {
        let _ = progress.save_atomic(path);
    }

    Ok(game_state.summary())
}

fn run_quiz(vocab: &[VocabTerm], mode: QuizMode, seed: u32, persist: bool) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let questions = generate_questions(vocab, mode, &mut rng);
    if questions.is_empty() {
        bail!("vocabulary set produced no questions");
    }

    let progress_path = if persist {
        default_progress_path().ok()
    } else {
        None
    };
    let mut progress = match &progress_path {
        Some(path) => ProgressStore::load_or_default(path),
        None => ProgressStore::default(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();
    let mut correct = 0usize;
    let mut answered = 0usize;
    let started = Instant::now();

    for (i, q) in questions.iter().enumerate() {
        let ask = match q.kind {
            QuestionKind::TermToDefinition => "What does this term mean?",
            QuestionKind::DefinitionToTerm => "Which term matches this definition?",
        };
        writeln!(out, "\nQ{}/{}: {}", i + 1, questions.len(), ask)?;
        writeln!(out, "  {}", q.prompt)?;
        for (n, option) in q.options.iter().enumerate() {
            writeln!(out, "  {}) {}", n + 1, option)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let picked = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| q.options.get(n));
        answered += 1;
        let outcome = match picked {
            Some(answer) if *answer == q.correct => {
                correct += 1;
                writeln!(out, "Correct!")?;
                Outcome::Hit
            }
            _ => {
                writeln!(out, "Wrong - the answer was: {}", q.correct)?;
                Outcome::Miss
            }
        };
        // Quiz attempts have no typing speed; keep whatever the typing
        // sessions last recorded for this term.
        let wpm = progress.get(&q.term).map(|p| p.wpm).unwrap_or(0.0);
        progress.record(
            &AttemptEvent {
                term: q.term.clone(),
                outcome,
                elapsed_ms: started.elapsed().as_millis() as u64,
            },
            wpm,
        );
    }

    if let Some(path) = &progress_path {
        let _ = progress.save_atomic(path);
    }

    let pct = if answered == 0 {
        0.0
    } else {
        correct as f32 / answered as f32 * 100.0
    };
    writeln!(
        out,
        "\nQuiz complete: {}/{} correct ({:.0}%) in {:.1}s",
        correct,
        answered,
        pct,
        started.elapsed().as_secs_f32()
    )?;
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    println!("Session summary");
    println!("  score:       {}", summary.score);
    println!("  wave:        {}", summary.wave);
    println!("  words typed: {}", summary.words_typed);
    println!("  time played: {:.1}s", summary.elapsed_seconds);
    println!("  accuracy:    {:.0}%", summary.accuracy * 100.0);
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
