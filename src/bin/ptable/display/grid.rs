use std::io::Write;

use anyhow::Result;

use periodic_table::model::labels::{GROUP_COUNT, group_label};
use periodic_table::{Element, PeriodicTable};

const INDENT: &str = "   ";
const CELL_W: usize = 4;

/// Renders the main grid followed by the lanthanide and actinide rows.
pub fn print_periodic_table(out: &mut impl Write, table: &PeriodicTable<'_>) -> Result<()> {
    let line = "─".repeat(CELL_W * usize::from(GROUP_COUNT) + 1);

    let numbers: String = (1..=GROUP_COUNT).map(|g| cell(&g.to_string())).collect();
    let labels: String = (1..=GROUP_COUNT)
        .map(|g| cell(group_label(g).unwrap_or("")))
        .collect();

    writeln!(out, "{}    {}", INDENT, numbers)?;
    writeln!(out, "{}    {}", INDENT, labels)?;
    writeln!(out, "{}   ┌{}┐", INDENT, line)?;
    for row in &table.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|slot| cell(slot.map_or("·", Element::symbol)))
            .collect();
        writeln!(out, "{}{:>2} │{} │", INDENT, row.period, cells)?;
    }
    writeln!(out, "{}   └{}┘", INDENT, line)?;
    writeln!(out)?;

    print_series(out, "La", &table.lanthanides)?;
    print_series(out, "Ac", &table.actinides)?;
    Ok(())
}

fn print_series(out: &mut impl Write, tag: &str, series: &[&Element]) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }
    let cells: String = series.iter().map(|e| cell(e.symbol())).collect();
    writeln!(out, "{}{:>2} │{} │", INDENT, tag, cells)?;
    Ok(())
}

fn cell(text: &str) -> String {
    format!(" {:<width$}", text, width = CELL_W - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_table::{Config, open};

    fn render() -> String {
        let store = open(&Config::default()).unwrap();
        let table = PeriodicTable::build(&store);
        let mut out = Vec::new();
        print_periodic_table(&mut out, &table).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cells_are_fixed_width() {
        assert_eq!(cell("H"), " H  ");
        assert_eq!(cell("Og"), " Og ");
        assert_eq!(cell("18"), " 18 ");
    }

    #[test]
    fn first_period_spans_the_table() {
        let text = render();
        let period_one = text
            .lines()
            .find(|l| l.trim_start().starts_with("1 │"))
            .unwrap();
        assert!(period_one.contains(" H  "));
        assert!(period_one.trim_end().ends_with("He  │"));
        assert_eq!(period_one.matches('·').count(), 16);
    }

    #[test]
    fn f_block_rows_follow_the_grid() {
        let text = render();
        let la = text.lines().find(|l| l.contains("La │")).unwrap();
        assert!(la.contains(" Lu "));
        let ac = text.lines().find(|l| l.contains("Ac │")).unwrap();
        assert!(ac.contains(" Lr "));
        assert_eq!(text.lines().filter(|l| l.contains('│')).count(), 9);
    }
}
