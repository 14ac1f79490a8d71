//! Display surfaces for the mini app.

use std::collections::{BTreeMap, VecDeque};
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use term_table::row::Row;
use term_table::table_cell::{Alignment as CellAlignment, TableCell};
use term_table::{Table, TableStyle};

/// Named output fields of the balance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Balance,
    VipLevel,
    TotalDeposits,
    Wallet,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Balance,
            Field::VipLevel,
            Field::TotalDeposits,
            Field::Wallet,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Balance => "Balance",
            Field::VipLevel => "VIP Level",
            Field::TotalDeposits => "Total Deposits",
            Field::Wallet => "TON Wallet",
        }
    }
}

/// Where operation results go.
///
/// Methods take `&self` because several operations may finish concurrently;
/// implementations synchronize internally.
pub trait View: Send + Sync {
    /// Replace the text of one field.
    fn render(&self, field: Field, text: &str);

    /// Show a message the user has to notice.
    fn alert(&self, message: &str);

    /// Ask the user for a line of input. `None` means cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

impl<V: View + ?Sized> View for Arc<V> {
    fn render(&self, field: Field, text: &str) {
        (**self).render(field, text)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }
}

#[derive(Debug, Default)]
struct Screen {
    fields: BTreeMap<Field, String>,
    alerts: Vec<String>,
    prompts: Vec<String>,
    prompt_answers: VecDeque<Option<String>>,
}

/// View that keeps everything in memory. Backs the terminal UI and the
/// tests.
#[derive(Debug, Default)]
pub struct MemoryView {
    screen: Mutex<Screen>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> Option<String> {
        self.lock().fields.get(&field).cloned()
    }

    pub fn fields(&self) -> BTreeMap<Field, String> {
        self.lock().fields.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.lock().alerts.last().cloned()
    }

    /// Remove and return alerts raised since the last call.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    /// Messages passed to `prompt`, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Queue the answer the next `prompt` call returns.
    pub fn queue_prompt_answer(&self, answer: Option<&str>) {
        self.lock()
            .prompt_answers
            .push_back(answer.map(str::to_string));
    }

    fn lock(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl View for MemoryView {
    fn render(&self, field: Field, text: &str) {
        self.lock().fields.insert(field, text.to_string());
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        let mut screen = self.lock();
        screen.prompts.push(message.to_string());
        screen.prompt_answers.pop_front().flatten()
    }
}

/// View for the one-shot CLI: alerts print as they happen, fields are
/// collected and printed as a table at the end.
#[derive(Debug, Default)]
pub struct ConsoleView {
    screen: MemoryView,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> BTreeMap<Field, String> {
        self.screen.fields()
    }

    /// Print the rendered fields, if any.
    pub fn print_summary(&self, title: &str) {
        let fields = self.screen.fields();
        if fields.is_empty() {
            return;
        }
        println!("{}", summary_table(title, &fields));
    }
}

impl View for ConsoleView {
    fn render(&self, field: Field, text: &str) {
        self.screen.render(field, text);
    }

    fn alert(&self, message: &str) {
        self.screen.alert(message);
        println!("⚠️  {message}");
    }

    fn prompt(&self, message: &str) -> Option<String> {
        print!("{message} ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Two-column table of the rendered fields under a centered header.
pub fn summary_table(title: &str, fields: &BTreeMap<Field, String>) -> String {
    let mut table = Table::new();
    table.style = TableStyle::extended();

    table.add_row(Row::new(vec![TableCell::builder(title)
        .col_span(2)
        .alignment(CellAlignment::Center)
        .build()]));

    for field in Field::all() {
        if let Some(text) = fields.get(field) {
            table.add_row(Row::new(vec![
                TableCell::builder(field.label())
                    .alignment(CellAlignment::Right)
                    .build(),
                TableCell::builder(text.as_str())
                    .alignment(CellAlignment::Left)
                    .build(),
            ]));
        }
    }

    table.render()
}
