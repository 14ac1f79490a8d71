//! Terminal front-end for the mini app: state, key handling and drawing.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use crate::config::consts::{MIN_DEPOSIT_STARS, TUI_ALERT_HISTORY};
use crate::view::Field;

/// Tab selection state for the mini app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Account,
    Deposit,
    Withdraw,
    Wallet,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Account, Tab::Deposit, Tab::Withdraw, Tab::Wallet]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Account => "Account",
            Tab::Deposit => "Add Stars",
            Tab::Withdraw => "Withdraw",
            Tab::Wallet => "Wallet",
        }
    }

    /// Move to the next tab (wraps around)
    pub fn next(&self) -> Tab {
        let tabs = Self::all();
        let current_index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(current_index + 1) % tabs.len()]
    }

    /// Move to the previous tab (wraps around)
    pub fn prev(&self) -> Tab {
        let tabs = Self::all();
        let current_index = tabs.iter().position(|t| t == self).unwrap_or(0);
        let prev_index = if current_index == 0 {
            tabs.len() - 1
        } else {
            current_index - 1
        };
        tabs[prev_index]
    }

    fn has_input(&self) -> bool {
        !matches!(self, Tab::Account)
    }

    fn input_hint(&self) -> String {
        match self {
            Tab::Account => String::new(),
            Tab::Deposit => format!("Amount of Stars (minimum {MIN_DEPOSIT_STARS})"),
            Tab::Withdraw => "Amount of Stars to withdraw".to_string(),
            Tab::Wallet => "TON wallet (EQ…, UQ… or name.ton)".to_string(),
        }
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Deposit(String),
    Withdraw(String),
    UpdateWallet(String),
}

/// Everything the terminal UI needs between frames besides the view fields.
#[derive(Debug)]
pub struct TuiState {
    pub current_tab: Tab,
    pub user_label: String,
    inputs: [String; 4],
    alerts: VecDeque<String>,
    pub in_flight: usize,
}

impl TuiState {
    pub fn new(user_label: impl Into<String>) -> Self {
        Self {
            current_tab: Tab::Account,
            user_label: user_label.into(),
            inputs: Default::default(),
            alerts: VecDeque::new(),
            in_flight: 0,
        }
    }

    pub fn input(&self, tab: Tab) -> &str {
        &self.inputs[tab_index(tab)]
    }

    fn input_mut(&mut self) -> &mut String {
        &mut self.inputs[tab_index(self.current_tab)]
    }

    /// Newest last, at most `TUI_ALERT_HISTORY` kept.
    pub fn push_alert(&mut self, alert: String) {
        if self.alerts.len() == TUI_ALERT_HISTORY {
            self.alerts.pop_front();
        }
        self.alerts.push_back(alert);
    }

    pub fn alerts(&self) -> impl Iterator<Item = &String> {
        self.alerts.iter()
    }

    /// Apply a key press; returns the action it triggers, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Right => {
                self.current_tab = self.current_tab.next();
                None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.current_tab = self.current_tab.prev();
                None
            }
            KeyCode::Char('q') if !self.current_tab.has_input() => Some(Action::Quit),
            KeyCode::Char('r') if !self.current_tab.has_input() => Some(Action::Refresh),
            KeyCode::Char(c) if self.current_tab.has_input() => {
                self.input_mut().push(c);
                None
            }
            KeyCode::Backspace if self.current_tab.has_input() => {
                self.input_mut().pop();
                None
            }
            KeyCode::Enter => self.submit(),
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        let tab = self.current_tab;
        if !tab.has_input() {
            return Some(Action::Refresh);
        }
        let text = std::mem::take(self.input_mut());
        Some(match tab {
            Tab::Account => Action::Refresh,
            Tab::Deposit => Action::Deposit(text),
            Tab::Withdraw => Action::Withdraw(text),
            Tab::Wallet => Action::UpdateWallet(text),
        })
    }
}

fn tab_index(tab: Tab) -> usize {
    match tab {
        Tab::Account => 0,
        Tab::Deposit => 1,
        Tab::Withdraw => 2,
        Tab::Wallet => 3,
    }
}

/// Poll for keyboard events with a timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn draw(f: &mut Frame, state: &TuiState, fields: &BTreeMap<Field, String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(6), // Account fields
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Alerts
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_fields(f, chunks[1], fields);
    render_input(f, chunks[2], state);
    render_alerts(f, chunks[3], state);
    render_footer(f, chunks[4], state);
}

fn render_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let tab_spans: Vec<Span> = Tab::all()
        .iter()
        .flat_map(|tab| {
            let style = if *tab == state.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            vec![
                Span::raw(" "),
                Span::styled(tab.title(), style),
                Span::raw(" │"),
            ]
        })
        .collect();

    let header = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("⭐ Stars ({})", state.user_label))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, fields: &BTreeMap<Field, String>) {
    let lines: Vec<Line> = Field::all()
        .iter()
        .map(|field| {
            let value = fields.get(field).map(String::as_str).unwrap_or("…");
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Account")
            .title_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(block, area);
}

fn render_input(f: &mut Frame, area: Rect, state: &TuiState) {
    let tab = state.current_tab;
    let (text, title) = if tab.has_input() {
        (format!("{}▏", state.input(tab)), tab.input_hint())
    } else {
        ("Press 'r' to refresh".to_string(), "Balance".to_string())
    };
    let input = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);
}

fn render_alerts(f: &mut Frame, area: Rect, state: &TuiState) {
    let items: Vec<ListItem> = state
        .alerts
        .iter()
        .rev()
        .map(|a| ListItem::new(a.as_str()))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Messages")
            .title_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let busy = if state.in_flight > 0 {
        format!(" │ {} request(s) in flight", state.in_flight)
    } else {
        String::new()
    };
    let footer = Paragraph::new(format!(
        "Tab/Shift+Tab: switch │ Enter: submit │ Esc: quit{busy}"
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
