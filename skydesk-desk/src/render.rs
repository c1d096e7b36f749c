use skydesk_core::{TicketId, TicketRow};

/// Render rows as a fixed-width text table. The selected row is marked
/// with `>` in the gutter.
pub fn render_table(rows: &[TicketRow], selected: Option<TicketId>) -> String {
    let mut widths = TicketRow::COLUMNS.map(str::len);
    let cells: Vec<[String; 5]> = rows.iter().map(TicketRow::cells).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, ' ', &TicketRow::COLUMNS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str("  ");
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for (row, cell) in rows.iter().zip(&cells) {
        let marker = if Some(row.ticket_id) == selected { '>' } else { ' ' };
        push_line(&mut out, marker, cell, &widths);
    }
    if rows.is_empty() {
        out.push_str("  (no tickets)\n");
    }
    out
}

fn push_line(out: &mut String, marker: char, cells: &[String; 5], widths: &[usize; 5]) {
    out.push(marker);
    out.push(' ');
    let padded: Vec<String> = cells.iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
