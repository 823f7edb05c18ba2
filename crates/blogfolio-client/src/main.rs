// crates/blogfolio-client/src/main.rs
mod display;
mod probe;

use anyhow::Result;
use blogfolio_common::config::{load_config, LogConfig};
use blogfolio_counter::registry;
use blogfolio_counter::{format_view_count, CountAnimation, VisitorFingerprint};
use blogfolio_page::PageContext;
use blogfolio_store::JsonFileStore;
use blogfolio_terminal::{Command, SubmitOutcome, Terminal, TerminalState};
use display::ColumnMeasure;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

fn session_id() -> String {
    std::env::var("BLOGFOLIO_SESSION")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string()[..8].to_string())
}

fn init_logging(log: &LogConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = PathBuf::from(&log.file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_env("BLOGFOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

/// Open the persistent store and this session's store under `data_dir`.
fn open_page(data_dir: &Path, session_id: &str) -> Result<PageContext> {
    std::fs::create_dir_all(data_dir.join("sessions"))?;
    let local = JsonFileStore::open(&data_dir.join("local.json"));
    let session = JsonFileStore::open(
        &data_dir
            .join("sessions")
            .join(format!("{}.json", session_id)),
    );
    Ok(PageContext::new(Box::new(local), Box::new(session)))
}

/// Count the visitor and animate the header counter up to the result.
async fn load_page(ctx: &mut PageContext, animation: Duration) -> Result<()> {
    let signals = probe::signals_from(&probe::default_probes().collect_all());
    let fingerprint = VisitorFingerprint::from_signals(&signals);
    let outcome = registry::record_visit(ctx, &fingerprint);
    tracing::info!(
        "page load: visitor {} count {} incremented {}",
        fingerprint,
        outcome.count,
        outcome.incremented
    );

    let anim = CountAnimation::new(outcome.count, animation);
    let mut ticker = tokio::time::interval(anim.interval().max(Duration::from_millis(1)));
    let mut stdout = std::io::stdout();
    for value in anim {
        ticker.tick().await;
        ctx.counter.set_text(format_view_count(value));
        write!(stdout, "{}", display::render_counter(theme_icon(ctx), ctx.counter.text()))?;
        stdout.flush()?;
    }
    writeln!(stdout, "\r")?;
    Ok(())
}

fn theme_icon(ctx: &PageContext) -> &'static str {
    ctx.theme.as_ref().map(|t| t.icon()).unwrap_or("")
}

fn header_row(ctx: &PageContext) -> String {
    display::render_counter(theme_icon(ctx), ctx.counter.text())
}

/// Commands that change what the header row shows.
fn changes_header(outcome: &SubmitOutcome) -> bool {
    matches!(
        outcome,
        SubmitOutcome::Executed(Command::Theme | Command::ResetViews)
    )
}

async fn run_terminal<R: Rng>(term: &mut Terminal<R>) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let cols = probe::terminal_size().map(|(_, cols)| cols).unwrap_or(80);
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write!(stdout, "{}", display::render_lines(term.scrollback().lines()))?;
    let mut rendered = term.scrollback().len();
    let mut generation = term.scrollback().generation();

    while term.state() != TerminalState::Exited {
        write!(
            stdout,
            "{}",
            display::render_prompt(&term.prompt(), term.input().value(), &ColumnMeasure)
        )?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(stdout, "\r")?;
            break;
        };
        if interactive {
            write!(
                stdout,
                "{}",
                display::render_erase_input(&term.prompt(), &line, cols)
            )?;
        }

        term.input_mut().set_value(line);
        let outcome = term.press_enter();

        let header = header_row(term.context());
        let scrollback = term.scrollback();
        if scrollback.generation() != generation {
            write!(stdout, "{}", display::render_redraw(&header, scrollback.lines()))?;
            generation = scrollback.generation();
        } else {
            write!(stdout, "{}", display::render_lines(&scrollback.lines()[rendered..]))?;
            if changes_header(&outcome) {
                let ctx = term.context();
                write!(
                    stdout,
                    "{}",
                    display::render_header(theme_icon(ctx), ctx.counter.text())
                )?;
            }
        }
        rendered = scrollback.len();
        if term.take_scroll_request() {
            stdout.flush()?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    let _log_guard = init_logging(&config.log)?;

    let session_id = session_id();
    let data_dir = config.data_path();
    tracing::info!(
        "blogfolio {} starting, session {} in {}",
        blogfolio_common::VERSION,
        session_id,
        data_dir.display()
    );

    let mut ctx = open_page(&data_dir, &session_id)?;
    load_page(&mut ctx, Duration::from_millis(config.counter.animation_ms)).await?;

    let mut term = Terminal::new(ctx, config.profile.clone(), StdRng::from_entropy());
    run_terminal(&mut term).await?;

    tracing::info!("session {} ended", session_id);
    Ok(())
}
