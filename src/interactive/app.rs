//! TUI application state and logic

use crate::core::Word;
use crate::search::SearchEngine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App<'a> {
    pub engine: SearchEngine<'a>,
    pub input: String,
    pub hits: Vec<Word>,
    pub search_time: Duration,
    pub scroll: usize,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(engine: SearchEngine<'a>) -> Self {
        Self {
            engine,
            input: String::new(),
            hits: Vec::new(),
            search_time: Duration::ZERO,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Number of words in the dictionary backing this session
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.engine.index().len()
    }

    /// Re-run the search for the current input. Called after every edit so
    /// results stay live while the user types.
    pub fn refresh(&mut self) {
        self.scroll = 0;

        if self.input.is_empty() {
            self.hits.clear();
            self.search_time = Duration::ZERO;
            return;
        }

        let start = Instant::now();
        self.hits = self.engine.search(&self.input);
        self.search_time = start.elapsed();
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() || c == '?' {
            self.input.push(c.to_ascii_uppercase());
            self.refresh();
        }
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.refresh();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.hits.len() {
            self.scroll += 1;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.input.is_empty() {
                        app.should_quit = true;
                    } else {
                        app.clear_input();
                    }
                }
                KeyCode::Char(c) => {
                    app.push_char(c);
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Up => {
                    app.scroll_up();
                }
                KeyCode::Down => {
                    app.scroll_down();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DictionaryIndex;

    fn index_of(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::build(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn typing_letters_updates_results_live() {
        let index = index_of(&["CAT", "ACT", "AT", "A"]);
        let mut app = App::new(SearchEngine::new(&index));

        app.push_char('t');
        app.push_char('a');
        app.push_char('c');

        assert_eq!(app.input, "TAC");
        let texts: Vec<_> = app.hits.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ACT", "CAT", "AT", "A"]);
    }

    #[test]
    fn non_letters_are_ignored() {
        let index = index_of(&["CAT"]);
        let mut app = App::new(SearchEngine::new(&index));

        app.push_char('4');
        app.push_char(' ');
        assert!(app.input.is_empty());

        app.push_char('?');
        assert_eq!(app.input, "?");
    }

    #[test]
    fn backspace_reruns_search() {
        let index = index_of(&["CAT", "AT"]);
        let mut app = App::new(SearchEngine::new(&index));

        app.push_char('t');
        app.push_char('a');
        app.push_char('c');
        app.backspace();

        assert_eq!(app.input, "TA");
        let texts: Vec<_> = app.hits.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["AT"]);
    }

    #[test]
    fn clearing_input_empties_results() {
        let index = index_of(&["CAT"]);
        let mut app = App::new(SearchEngine::new(&index));

        app.push_char('c');
        app.push_char('a');
        app.push_char('t');
        assert!(!app.hits.is_empty());

        app.clear_input();
        assert!(app.input.is_empty());
        assert!(app.hits.is_empty());
    }

    #[test]
    fn scroll_is_clamped_to_results() {
        let index = index_of(&["CAT", "AT", "A"]);
        let mut app = App::new(SearchEngine::new(&index));

        app.push_char('t');
        app.push_char('a');
        app.push_char('c');

        app.scroll_up();
        assert_eq!(app.scroll, 0);

        for _ in 0..10 {
            app.scroll_down();
        }
        assert!(app.scroll < app.hits.len());
    }
}
