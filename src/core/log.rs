use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{colour_for_operation, strip_ansi};
use crate::utils::time::pretty_log_date;

const OP_WIDTH_LIMIT: usize = 40;

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log as aligned lines, one per entry.
    pub fn render(entries: &[LogEntry], color: bool) -> Vec<String> {
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .map(|s| {
                if s.chars().count() > OP_WIDTH_LIMIT {
                    let mut cut: String = s.chars().take(OP_WIDTH_LIMIT - 3).collect();
                    cut.push_str("...");
                    cut
                } else {
                    s
                }
            })
            .collect();

        let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        entries
            .iter()
            .zip(op_targets)
            .map(|(e, op_target)| {
                // only the operation word gets coloured
                let shown = if !color {
                    op_target
                } else {
                    let paint = colour_for_operation(&e.operation);
                    match op_target.split_once(' ') {
                        Some((op, rest)) => format!("{} {}", paint.paint(op), rest),
                        None => paint.paint(op_target.as_str()).to_string(),
                    }
                };
                // pad on visible cells, escape codes take none
                let visible = strip_ansi(&shown).chars().count();
                let padding = " ".repeat(op_w.saturating_sub(visible));
                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    e.id,
                    pretty_log_date(&e.date),
                    shown,
                    padding,
                    e.message,
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool, color: bool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;
        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
        }
        for line in Self::render(&entries, color) {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, op: &str, target: &str, msg: &str) -> LogEntry {
        LogEntry {
            id,
            date: "2025-06-01T10:11:12.5+02:00".into(),
            operation: op.into(),
            target: target.into(),
            message: msg.into(),
        }
    }

    #[test]
    fn aligns_messages_without_colour() {
        let lines = LogLogic::render(
            &[
                entry(1, "init", "", "Database initialized"),
                entry(12, "geocode", "1.000000,2.000000", "offline"),
            ],
            false,
        );

        assert_eq!(
            lines[0],
            " 1: 2025-06-01T10:11:12+02:00 | init                        => Database initialized"
        );
        assert!(lines[1].starts_with("12: "));
        assert!(lines[1].ends_with("geocode (1.000000,2.000000) => offline"));
    }

    #[test]
    fn colour_does_not_shift_alignment() {
        let entries = [
            entry(1, "init", "", "Database initialized"),
            entry(2, "geocode", "1.000000,2.000000", "offline"),
            entry(3, "permission", "foreground", "denied"),
        ];
        let plain = LogLogic::render(&entries, false);
        let coloured = LogLogic::render(&entries, true);

        assert_ne!(plain, coloured);
        let stripped: Vec<String> = coloured.iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(stripped, plain);
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = "x".repeat(80);
        let lines = LogLogic::render(&[entry(1, "location", &long, "m")], false);
        assert!(lines[0].contains("..."));
    }
}
