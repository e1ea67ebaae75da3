use std::fmt;
use std::str::FromStr;

use super::categories::{Category, Metallicity, Phase};

/// Traditional column labels, indexed by group number. Index 0 is the
/// "unassigned" sentinel and has no label; columns 8–10 share "8B".
pub const PERIODIC_TABLE_GROUPS: [Option<&str>; 19] = [
    None,
    Some("1A"),
    Some("2A"),
    Some("3B"),
    Some("4B"),
    Some("5B"),
    Some("6B"),
    Some("7B"),
    Some("8B"),
    Some("8B"),
    Some("8B"),
    Some("1B"),
    Some("2B"),
    Some("3A"),
    Some("4A"),
    Some("5A"),
    Some("6A"),
    Some("7A"),
    Some("8A"),
];

pub const GROUP_COUNT: u8 = 18;

const COLUMNS: [u8; GROUP_COUNT as usize] =
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];

pub fn group_label(group: u8) -> Option<&'static str> {
    PERIODIC_TABLE_GROUPS.get(usize::from(group)).copied().flatten()
}

/// Every group column carrying `label`, compared case-insensitively.
///
/// Returns an empty slice for unknown labels.
pub fn columns_for_label(label: &str) -> &'static [u8] {
    let wanted = label.trim().to_ascii_uppercase();
    let mut hits = PERIODIC_TABLE_GROUPS
        .iter()
        .enumerate()
        .filter(|(_, l)| **l == Some(wanted.as_str()))
        .map(|(idx, _)| idx);

    match (hits.next(), hits.last()) {
        (Some(first), Some(last)) => &COLUMNS[first - 1..last],
        (Some(only), None) => &COLUMNS[only - 1..only],
        _ => &[],
    }
}

/// A presentation vocabulary for the classification enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    metallicity: [&'static str; 3],
    category: [&'static str; 8],
    phase: [&'static str; 3],
}

impl Labels {
    pub fn metallicity(&self, value: Metallicity) -> &'static str {
        self.metallicity[value as usize]
    }

    pub fn category(&self, value: Category) -> &'static str {
        self.category[value as usize]
    }

    pub fn phase(&self, value: Phase) -> &'static str {
        self.phase[value as usize]
    }
}

pub const HUMAN_LABELS: Labels = Labels {
    metallicity: ["metal", "nonmetal", "metalloid"],
    category: [
        "halogen",
        "noble gas",
        "alkali metal",
        "alkali earth",
        "lanthanide",
        "actinide",
        "transition metal",
        "basic metal",
    ],
    phase: ["solid [STP]", "liquid [STP]", "gas [STP]"],
};

pub const CSS_CLASSES: Labels = Labels {
    metallicity: ["dpt_met", "dpt_nmet", "dpt_moid"],
    category: [
        "dpt_hal", "dpt_nob", "dpt_amet", "dpt_aear", "dpt_lan", "dpt_act", "dpt_tmet", "dpt_bmet",
    ],
    phase: ["dpt_solid", "dpt_liquid", "dpt_gas"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    #[default]
    Human,
    Css,
}

impl LabelStyle {
    pub fn labels(self) -> &'static Labels {
        match self {
            LabelStyle::Human => &HUMAN_LABELS,
            LabelStyle::Css => &CSS_CLASSES,
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelStyle::Human => write!(f, "human"),
            LabelStyle::Css => write!(f, "css"),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(LabelStyle::Human),
            "css" | "class" => Ok(LabelStyle::Css),
            other => Err(format!("unknown label style '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_label_lookup() {
        assert_eq!(group_label(0), None);
        assert_eq!(group_label(1), Some("1A"));
        assert_eq!(group_label(9), Some("8B"));
        assert_eq!(group_label(11), Some("1B"));
        assert_eq!(group_label(18), Some("8A"));
        assert_eq!(group_label(19), None);
    }

    #[test]
    fn triad_label_spans_three_columns() {
        assert_eq!(columns_for_label("8B"), &[8, 9, 10]);
        assert_eq!(columns_for_label("8b"), &[8, 9, 10]);
    }

    #[test]
    fn single_labels_map_to_one_column() {
        assert_eq!(columns_for_label("1a"), &[1]);
        assert_eq!(columns_for_label("2B"), &[12]);
        assert_eq!(columns_for_label(" 7A "), &[17]);
        assert_eq!(columns_for_label("8A"), &[18]);
    }

    #[test]
    fn unknown_label_has_no_columns() {
        assert!(columns_for_label("9Z").is_empty());
        assert!(columns_for_label("").is_empty());
    }

    #[test]
    fn label_tables_follow_enum_order() {
        assert_eq!(HUMAN_LABELS.metallicity(Metallicity::Metalloid), "metalloid");
        assert_eq!(HUMAN_LABELS.category(Category::BasicMetal), "basic metal");
        assert_eq!(HUMAN_LABELS.phase(Phase::Gas), "gas [STP]");
        assert_eq!(CSS_CLASSES.metallicity(Metallicity::Nonmetal), "dpt_nmet");
        assert_eq!(CSS_CLASSES.category(Category::NobleGas), "dpt_nob");
        assert_eq!(CSS_CLASSES.phase(Phase::Liquid), "dpt_liquid");
    }

    #[test]
    fn label_style_parsing() {
        assert_eq!("CSS".parse::<LabelStyle>().unwrap(), LabelStyle::Css);
        assert_eq!("human".parse::<LabelStyle>().unwrap(), LabelStyle::Human);
        assert!("fancy".parse::<LabelStyle>().is_err());
        assert_eq!(LabelStyle::Css.labels(), &CSS_CLASSES);
    }
}
