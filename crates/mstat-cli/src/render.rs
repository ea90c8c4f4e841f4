use mstat_core::Table;

/// Render a table as right-aligned text columns for the terminal.
pub fn aligned(table: &Table) -> String {
    let mut widths: Vec<usize> = table.headers().iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let parts: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:>w$}"))
            .collect();
        out.push_str(parts.join("  ").trim_end());
        out.push('\n');
    };
    line(table.headers());
    for row in table.rows() {
        line(row);
    }
    out
}
