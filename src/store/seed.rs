use crate::model::element::ElementFields;
use crate::model::types::Symbol;

pub const DEUTERIUM_ID: u32 = 1001;
pub const TRITIUM_ID: u32 = 1002;

/// The built-in record set: one record per element, identified by atomic
/// number, followed by deuterium and tritium. Groups start unassigned.
pub fn seed_records() -> Vec<(u32, ElementFields)> {
    let mut records: Vec<(u32, ElementFields)> = Symbol::ALL
        .iter()
        .map(|s| {
            let n = s.atomic_number();
            (u32::from(n), ElementFields::new(u16::from(n), s.as_str()))
        })
        .collect();
    records.push((DEUTERIUM_ID, ElementFields::new(1, "D")));
    records.push((TRITIUM_ID, ElementFields::new(1, "T")));
    records
}
