use crate::errors::AppResult;
use crate::store::log::read_entries;
use crate::utils::colors::colour_for_operation;
use crate::utils::formatting::{pad_right, truncate, visible_width};
use crate::utils::time::display_timestamp;
use std::path::Path;

const MAX_TARGET_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(log_file: &Path) -> AppResult<()> {
        let entries = read_entries(log_file)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty ({})", log_file.display());
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (
                    i + 1,
                    display_timestamp(&e.date),
                    e.operation,
                    truncate(&op_target, MAX_TARGET_WIDTH),
                    e.message,
                )
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows
            .iter()
            .map(|(_, date, _, _, _)| visible_width(date))
            .max()
            .unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| visible_width(op_target))
            .max()
            .unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let colour = colour_for_operation(&operation);

            // only the operation word is coloured, the target stays plain
            let coloured = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                None => colour.paint(op_target.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {} | {} => {}",
                id,
                pad_right(&date, date_w),
                pad_right(&coloured, op_w),
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
