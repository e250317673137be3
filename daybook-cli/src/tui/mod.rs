//! Interactive terminal interface.

mod app;
mod attr;
mod calendar_view;
mod custom;
mod notify_bar;
mod panels;
mod prompt;
mod status;

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use daybook_core::Daybook;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn run(daybook: Daybook) -> Result<()> {
    let mut app = App::new(daybook, Local::now().date_naive())?;
    let _clock = app.notify().spawn_clock();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    // Leave the alternate screen before the panic message is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| frame.render_widget(&*app, frame.area()))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.set_today(Local::now().date_naive());
    }

    tracing::info!("leaving interface");
    Ok(())
}
