use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::categories::{Category, Metallicity, Phase, period_of};
use super::labels::{Labels, group_label};
use crate::chem::{ChemEntry, ChemistrySource};
use crate::error::Error;

/// Identifiers at or above this value mark hydrogen isotope records
/// (deuterium, tritium) that share atomic number 1 with hydrogen.
pub const ISOTOPE_ID_FLOOR: u32 = 1000;

/// The persisted columns of an element record.
///
/// Numeric columns are wider than any valid value so out-of-range input
/// reaches [`ElementStore::create`](crate::ElementStore::create) validation
/// instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementFields {
    pub atomic_number: u16,
    pub symbol: String,
    /// 0 until the group assignment routine has run.
    #[serde(default)]
    pub group: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl ElementFields {
    pub fn new(atomic_number: u16, symbol: impl Into<String>) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            group: 0,
            video: None,
        }
    }

    pub fn with_group(mut self, group: u16) -> Self {
        self.group = group;
        self
    }

    pub fn with_video(mut self, video: impl Into<String>) -> Self {
        self.video = Some(video.into());
        self
    }
}

/// A stored element together with its derived chemistry.
///
/// Chemistry data is looked up by symbol on first access and cached for the
/// lifetime of this value; nothing is shared between records.
#[derive(Clone)]
pub struct Element {
    id: u32,
    fields: ElementFields,
    chem: OnceCell<Arc<ChemEntry>>,
    source: Arc<dyn ChemistrySource>,
}

impl Element {
    pub(crate) fn new(id: u32, fields: ElementFields, source: Arc<dyn ChemistrySource>) -> Self {
        Self {
            id,
            fields,
            chem: OnceCell::new(),
            source,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        // Range-checked when the record was created.
        self.fields.atomic_number as u8
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.fields.symbol
    }

    #[inline]
    pub fn group(&self) -> u8 {
        self.fields.group as u8
    }

    pub fn video(&self) -> Option<&str> {
        self.fields.video.as_deref()
    }

    pub fn fields(&self) -> &ElementFields {
        &self.fields
    }

    pub(crate) fn set_group(&mut self, group: u8) {
        self.fields.group = u16::from(group);
    }

    /// `false` for the hydrogen isotope records.
    pub fn is_normal(&self) -> bool {
        self.id < ISOTOPE_ID_FLOOR
    }

    /// Chemistry data for this record's symbol, resolved once and cached.
    pub fn chemistry(&self) -> Result<&ChemEntry, Error> {
        if let Some(entry) = self.chem.get() {
            return Ok(&**entry);
        }
        let entry = self.source.lookup(&self.fields.symbol)?;
        debug!("cached chemistry for {} (id {})", self.fields.symbol, self.id);
        Ok(&**self.chem.get_or_init(|| entry))
    }

    /// Whether [`chemistry`](Self::chemistry) has already resolved.
    pub fn is_chemistry_cached(&self) -> bool {
        self.chem.get().is_some()
    }

    /// Mass in amu.
    pub fn atomic_mass(&self) -> Result<f64, Error> {
        Ok(self.chemistry()?.mass)
    }

    /// Density in g/cm³, `None` where the data source has no measurement.
    pub fn density(&self) -> Result<Option<f64>, Error> {
        Ok(self.chemistry()?.density)
    }

    /// English name.
    pub fn name(&self) -> Result<&str, Error> {
        Ok(&self.chemistry()?.name)
    }

    pub fn ions(&self) -> Result<&[i8], Error> {
        Ok(&self.chemistry()?.ions)
    }

    pub fn isotopes(&self) -> Result<&[u16], Error> {
        Ok(&self.chemistry()?.isotopes)
    }

    pub fn metallicity(&self) -> Metallicity {
        Metallicity::of(self.atomic_number())
    }

    pub fn category(&self) -> Option<Category> {
        Category::of(self.atomic_number())
    }

    pub fn phase_at_stp(&self) -> Phase {
        Phase::at_stp(self.atomic_number())
    }

    pub fn period(&self) -> u8 {
        period_of(self.atomic_number())
    }

    /// Column label such as `"8B"`; `None` while the group is unassigned.
    pub fn group_name(&self) -> Option<&'static str> {
        group_label(self.group())
    }

    pub fn metallicity_label(&self, labels: &Labels) -> &'static str {
        labels.metallicity(self.metallicity())
    }

    /// Empty when the element has no special category.
    pub fn category_label(&self, labels: &Labels) -> &'static str {
        self.category().map_or("", |c| labels.category(c))
    }

    pub fn phase_label(&self, labels: &Labels) -> &'static str {
        labels.phase(self.phase_at_stp())
    }

    /// Metallicity, category and phase labels joined by spaces, skipping
    /// empty ones.
    pub fn presentation_tag(&self, labels: &Labels) -> String {
        [
            self.metallicity_label(labels),
            self.category_label(labels),
            self.phase_label(labels),
        ]
        .iter()
        .filter(|label| !label.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.fields == other.fields
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("atomic_number", &self.fields.atomic_number)
            .field("symbol", &self.fields.symbol)
            .field("group", &self.fields.group)
            .field("video", &self.fields.video)
            .finish()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chemistry() {
            Ok(entry) => write!(f, "{}({})", entry.name, self.fields.symbol),
            Err(_) => f.write_str(&self.fields.symbol),
        }
    }
}
