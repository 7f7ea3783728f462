use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use log::{info, warn};
use swiftread_core::{
    app::{ReaderApp, TickResult},
    content::sample_text,
};

use cli::Cli;
use console::ChannelInput;
use terminal::TerminalRenderer;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/console.rs"]
mod console;
#[path = "main/source.rs"]
mod source;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "SwiftRead";
const TICK_INTERVAL_MS: u64 = 2;
const REPORT_INTERVAL_MS: u64 = 5_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let text = match source::load(&cli.text_source()) {
        Ok(text) => text,
        Err(err) => {
            warn!("source: {err}; falling back to the sample text");
            sample_text()
        }
    };

    let reader_config = cli.reader_config();
    let slowing = cli.slowing_config();
    let mut app = ReaderApp::new(ChannelInput, reader_config, slowing, TITLE);
    app.set_on_complete(|| info!("reader: reached the end; r restarts"));
    app.load_text(&text);

    info!(
        "Reader started: words={} wpm={} total_s={:.0} sentence_end={} clause_end={} long_word={}x>{} paragraph_break={}",
        app.sequence_len(),
        app.wpm(),
        app.total_seconds(),
        slowing.sentence_end_multiplier,
        slowing.clause_end_multiplier,
        slowing.long_word_multiplier,
        slowing.long_word_threshold,
        slowing.paragraph_break_multiplier
    );
    info!("{}", console::HELP);

    if let Err(err) = console::spawn_stdin_reader() {
        warn!("console: stdin reader unavailable: {err}");
    }

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    let mut display_fault_logged = false;

    let loop_start = Instant::now();
    if cli.autoplay {
        app.play(0);
    }

    let mut report_words = 0u64;
    let mut report_start_ms = 0u64;

    loop {
        let now_ms = loop_start.elapsed().as_millis();

        if app.tick(now_ms) != TickResult::NoRender {
            let mut result = Ok(());
            app.with_screen(|screen| result = renderer.render(screen));
            if let Err(err) = result
                && !display_fault_logged
            {
                warn!("terminal: render failed: {err}");
                display_fault_logged = true;
            }
        }

        if console::quit_requested() {
            let _ = renderer.finish();
            info!("Reader stopped at word {}/{}", app.current_index() + 1, app.sequence_len());
            std::process::exit(0);
        }

        report_words = report_words.saturating_add(app.drain_word_updates() as u64);
        let elapsed_ms = now_ms.saturating_sub(report_start_ms);
        if elapsed_ms >= REPORT_INTERVAL_MS {
            if report_words > 0 {
                let wpm_x100 = report_words * 6_000_000 / elapsed_ms.max(1);
                info!(
                    "effective_wpm={}.{:02} words={} elapsed_ms={}",
                    wpm_x100 / 100,
                    wpm_x100 % 100,
                    report_words,
                    elapsed_ms
                );
            }

            report_words = 0;
            report_start_ms = now_ms;
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}
