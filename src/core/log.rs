use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::journal::{self, JournalEntry};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

/// Widest the "operation (target)" column may grow.
const OP_COLUMN_MAX: usize = 40;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the journal, one colored line per entry, oldest first.
    pub fn render(entries: &[JournalEntry]) -> Vec<String> {
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.timestamp.len()).max().unwrap_or(0);

        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let colour = color_for_operation(&e.operation);

                let mut op_target = colour.paint(e.operation.as_str()).to_string();
                if !e.target.is_empty() {
                    op_target.push_str(&format!(" ({})", e.target));
                }

                let visible_len = strip_ansi(&op_target).chars().count();
                let padding = " ".repeat(OP_COLUMN_MAX.saturating_sub(visible_len));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    e.timestamp,
                    op_target,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(store: &RecordStore) -> AppResult<()> {
        let entries = journal::read_all(&store.journal_path())?;

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        println!("📜 Journal:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}
