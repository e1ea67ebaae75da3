use std::io::{self, Write};

use anyhow::{Context, Result};

use periodic_table::{ElementStore, Field, GroupKey, Labels, Predicate, View};

use crate::cli::{GroupArgs, ListArgs, ShowArgs};
use crate::display::{print_element_details, print_element_list};

pub fn run_show(store: &ElementStore, args: &ShowArgs, labels: &Labels) -> Result<()> {
    let element = match args.element.trim().parse::<u32>() {
        Ok(number) => store
            .normal_elements()
            .get(Predicate::eq(Field::AtomicNumber, number)),
        Err(_) => store.get_symbol(args.element.trim()),
    }
    .with_context(|| format!("Failed to look up element '{}'", args.element))?;

    let mut out = io::stdout().lock();
    print_element_details(&mut out, element, labels)?;
    out.flush()?;
    Ok(())
}

pub fn run_list(store: &ElementStore, args: &ListArgs, labels: &Labels) -> Result<()> {
    let view = View::from(args.category);
    let mut members = store.view(view);
    if !args.isotopes {
        members = members.filter(View::Normal.predicate());
    }

    let mut out = io::stdout().lock();
    print_element_list(&mut out, view.name(), &members.to_vec(), labels)?;
    out.flush()?;
    Ok(())
}

pub fn run_group(store: &ElementStore, args: &GroupArgs, labels: &Labels) -> Result<()> {
    let key = GroupKey::from(args.group.as_str());
    let members = store
        .group_named(key)
        .with_context(|| format!("Failed to resolve group '{}'", args.group))?;

    let title = match key.columns() {
        Ok([single]) => format!("group {}", single),
        Ok(columns) => format!("groups {:?}", columns),
        Err(_) => format!("group {}", key),
    };

    let mut out = io::stdout().lock();
    print_element_list(&mut out, &title, &members.to_vec(), labels)?;
    out.flush()?;
    Ok(())
}
