use std::io::Write;

use anyhow::Result;

use periodic_table::{Element, Labels};

use crate::util::text::truncate;

const INDENT: &str = "   ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_element_details(
    out: &mut impl Write,
    element: &Element,
    labels: &Labels,
) -> Result<()> {
    let group = match element.group_name() {
        Some(label) => format!("{} ({})", element.group(), label),
        None => "unassigned".to_string(),
    };
    let density = match element.density()? {
        Some(d) => format!("{} g/cm³", d),
        None => "—".to_string(),
    };
    let isotopes = match element.chemistry()?.isotope_span() {
        Some((first, last)) if first == last => format!("{}", first),
        Some((first, last)) => format!("{}–{}", first, last),
        None => "—".to_string(),
    };

    let mut rows = vec![
        ("Symbol", element.symbol().to_string()),
        ("Name", element.name()?.to_string()),
        ("Atomic Number", element.atomic_number().to_string()),
        ("Mass (amu)", format!("{}", element.atomic_mass()?)),
        ("Density", density),
        ("Period", element.period().to_string()),
        ("Group", group),
        ("Metallicity", element.metallicity_label(labels).to_string()),
        ("Category", non_empty(element.category_label(labels))),
        ("Phase", element.phase_label(labels).to_string()),
        ("Ions", format_ions(element.ions()?)),
        ("Isotopes", isotopes),
    ];
    if let Some(video) = element.video() {
        rows.push(("Video", video.to_string()));
    }

    print_kv_table(out, &element.to_string(), &rows)?;
    Ok(())
}

pub fn print_element_list(
    out: &mut impl Write,
    title: &str,
    elements: &[&Element],
    labels: &Labels,
) -> Result<()> {
    let z_w = 3usize;
    let sym_w = 3usize;
    let name_w = 13usize;
    let group_w = 5usize;
    let sep_overhead = 13;
    let tag_w = SAFE_TABLE_WIDTH.saturating_sub(z_w + sym_w + name_w + group_w + sep_overhead);

    let mut rows = Vec::with_capacity(elements.len());
    for element in elements {
        rows.push((
            element.atomic_number(),
            element.symbol(),
            element.name()?,
            element.group_name().unwrap_or("—"),
            element.presentation_tag(labels),
        ));
    }

    let border = |l: &str, m: &str, r: &str| {
        format!(
            "{}{l}{}{m}{}{m}{}{m}{}{m}{}{r}",
            INDENT,
            "─".repeat(z_w + 2),
            "─".repeat(sym_w + 2),
            "─".repeat(name_w + 2),
            "─".repeat(group_w + 2),
            "─".repeat(tag_w + 2),
        )
    };

    writeln!(
        out,
        "{}┌─ {} ({}) ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 12),
        elements.len()
    )?;
    writeln!(out, "{}", border("┌", "┬", "┐"))?;
    writeln!(
        out,
        "{}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:<group_w$} │ {:<tag_w$} │",
        INDENT,
        "Z",
        "Sym",
        "Name",
        "Group",
        "Tags",
    )?;
    writeln!(out, "{}", border("├", "┼", "┤"))?;

    for (z, symbol, name, group, tag) in &rows {
        writeln!(
            out,
            "{}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:<group_w$} │ {:<tag_w$} │",
            INDENT,
            z,
            symbol,
            truncate(name, name_w),
            group,
            truncate(tag, tag_w),
        )?;
    }

    writeln!(out, "{}", border("└", "┴", "┘"))?;
    Ok(())
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> Result<()> {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;
    writeln!(
        out,
        "{}│ {:<key_w$} │ {:<val_w$} │",
        INDENT,
        "Property",
        "Value",
        key_w = key_w,
        val_w = val_w
    )?;
    writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:<val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        )?;
    }

    writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;
    Ok(())
}

fn non_empty(label: &str) -> String {
    if label.is_empty() {
        "—".to_string()
    } else {
        label.to_string()
    }
}

fn format_ions(ions: &[i8]) -> String {
    if ions.is_empty() {
        return "—".to_string();
    }
    ions.iter()
        .map(|&charge| format!("{:+}", charge))
        .collect::<Vec<_>>()
        .join(" ")
}
