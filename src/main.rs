mod config;
mod error;
mod models;
mod session;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{config_path, load_config};
use crate::error::{AppError, Result};
use crate::ui::{App, render};

/// 获取数据目录路径 (~/.local/share/digitspan/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join("digitspan");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入文件，终端留给 TUI
fn init_logging() -> Result<PathBuf> {
    let log_path = get_data_dir()?.join("digitspan.log");
    let file = File::options().create(true).append(true).open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(log_path)
}

fn main() -> Result<()> {
    let log_path = init_logging()?;
    tracing::info!(log = %log_path.display(), "digitspan starting");

    // 配置文件路径 (~/.config/digitspan/config.toml)
    let config_path = config_path()?;
    let config = load_config(&config_path)?;
    tracing::info!(path = %config_path.display(), timings = ?config.timings, "config loaded");

    let tick = config.timings.tick();
    let mut app = App::new(config.timings);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, tick);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    tracing::info!(level = app.session.level(), "digitspan exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render(f, app))?;

        // 等待按键，超时后继续推进计时器
        if !event::poll(tick)? {
            continue;
        }
        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.tick(Instant::now());
                ui::handle_key_event(app, key.code)
            }
            Event::Paste(text) => {
                app.tick(Instant::now());
                ui::handle_paste_event(app, text)
            }
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
