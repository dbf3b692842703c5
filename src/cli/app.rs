use super::source::Filter;
use super::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};
use rustpager::{ControlEvent, PageSizeOptions, PaginationConfig, Paginator};
use std::io;
use tracing::{debug, info, warn};
use tui_textarea::TextArea;

pub struct App<'a> {
    pub all_items: Vec<String>,
    pub view: Paginator<String>,
    pub options: PageSizeOptions,
    pub use_regex: bool,
    pub exit: bool,

    // Filter State
    pub filter_input: TextArea<'a>,
    pub filter_text: String,
    pub editing_filter: bool,
    pub status: Option<Line<'static>>,
}

impl<'a> App<'a> {
    pub fn new(items: Vec<String>, config: &PaginationConfig, use_regex: bool) -> Self {
        let view = Paginator::with_config(items.clone(), config);

        Self {
            all_items: items,
            view,
            options: config.page_size_options.clone(),
            use_regex,
            exit: false,
            filter_input: Self::new_filter_input(use_regex),
            filter_text: String::new(),
            editing_filter: false,
            status: None,
        }
    }

    fn new_filter_input(use_regex: bool) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(if use_regex {
            "Regular expression (Enter to apply, Esc to cancel)"
        } else {
            "Text to match (Enter to apply, Esc to cancel)"
        });
        textarea.set_block(Block::default().borders(Borders::ALL).title(" Filter "));
        textarea
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res.map_err(Into::into)
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            if self.exit {
                info!("Leaving pager on {}", self.view.controls().page_label());
                return Ok(());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.editing_filter {
            match key.code {
                KeyCode::Enter => self.apply_filter(),
                KeyCode::Esc => {
                    self.editing_filter = false;
                    self.reset_filter_input();
                }
                _ => {
                    self.filter_input.input(key);
                }
            }
            return;
        }

        let state = self.view.state();
        let event = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.exit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
                return;
            }
            KeyCode::Char('/') => {
                self.editing_filter = true;
                return;
            }
            KeyCode::Left | KeyCode::Char('h') => ControlEvent::previous(&state),
            KeyCode::Right | KeyCode::Char('l') => ControlEvent::next(&state),
            KeyCode::Home | KeyCode::Char('g') => ControlEvent::first(),
            KeyCode::End | KeyCode::Char('G') => ControlEvent::last(&state),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let size = self.options.next_after(state.page_size());
                ControlEvent::page_size(size)
            }
            KeyCode::Char('-') => {
                let size = self.options.previous_before(state.page_size());
                ControlEvent::page_size(size)
            }
            _ => return,
        };

        debug!(?event, "Applying control event");
        self.view.apply(event);
    }

    fn reset_filter_input(&mut self) {
        self.filter_input = Self::new_filter_input(self.use_regex);
        self.filter_input.insert_str(&self.filter_text);
    }

    fn apply_filter(&mut self) {
        let text = self.filter_input.lines().join(" ");
        match Filter::new(&text, self.use_regex) {
            Ok(filter) => {
                let matching = filter.apply(&self.all_items);
                info!(
                    filter = %text,
                    matches = matching.len(),
                    "Filter applied"
                );
                self.view.replace(matching);
                self.filter_text = text.trim().to_string();
                self.editing_filter = false;
                self.status = None;
            }
            Err(err) => {
                warn!("Rejected filter '{}': {}", text, err);
                self.status = Some(Line::from(vec![Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                )]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::source::demo_items;

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = App::new(demo_items(), &PaginationConfig::default(), false);
        assert_eq!(app.view.state().total_pages(), 24);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.state().page(), 3);

        press(&mut app, KeyCode::End);
        assert_eq!(app.view.state().page(), 24);
        assert_eq!(app.view.current_items().len(), 7);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.state().page(), 24);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.state().page(), 1);
    }

    #[test]
    fn test_page_size_keys_cycle_options() {
        let mut app = App::new(demo_items(), &PaginationConfig::default(), false);
        press(&mut app, KeyCode::Right);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.view.state().page_size(), 25);
        assert_eq!(app.view.state().page(), 1);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.view.state().page_size(), 5);
    }

    #[test]
    fn test_huge_page_size_option_is_applied() {
        let huge = 1usize << 63;
        let config = PaginationConfig::default()
            .page_size_options(PageSizeOptions::new([10, huge]).unwrap());
        let mut app = App::new(demo_items(), &config, false);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.view.state().page_size(), i64::MAX as usize);
        assert_eq!(app.view.state().total_pages(), 1);
    }

    #[test]
    fn test_filter_replaces_collection() {
        let mut app = App::new(demo_items(), &PaginationConfig::default(), false);
        press(&mut app, KeyCode::Char('l'));

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "tmt");
        press(&mut app, KeyCode::Enter);

        assert!(!app.editing_filter);
        assert_eq!(app.filter_text, "tmt");
        assert_eq!(app.view.state().total_items(), 30);
        assert_eq!(app.view.state().page(), 1);
        assert!(app.view.current_items().iter().all(|item| item.contains("TMT")));
    }

    #[test]
    fn test_bad_regex_keeps_editing() {
        let mut app = App::new(demo_items(), &PaginationConfig::default(), true);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "[");
        press(&mut app, KeyCode::Enter);

        assert!(app.editing_filter);
        assert!(app.status.is_some());
        assert_eq!(app.view.state().total_items(), 237);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Vec::new(), &PaginationConfig::default(), false);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.exit);
    }
}
