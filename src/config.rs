use crate::model::labels::LabelStyle;

/// Settings for [`open`](crate::open).
///
/// `chemistry` and `fixture` hold document text, not paths: a TOML chemistry
/// table in the embedded schema and a JSON fixture respectively.
#[derive(Debug, Clone)]
pub struct Config {
    pub chemistry: Option<String>,
    pub fixture: Option<String>,
    pub assign_groups: bool,
    pub labels: LabelStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chemistry: None,
            fixture: None,
            assign_groups: true,
            labels: LabelStyle::Human,
        }
    }
}

impl Config {
    pub fn with_chemistry(mut self, toml: impl Into<String>) -> Self {
        self.chemistry = Some(toml.into());
        self
    }

    pub fn with_fixture(mut self, json: impl Into<String>) -> Self {
        self.fixture = Some(json.into());
        self
    }

    pub fn without_group_assignment(mut self) -> Self {
        self.assign_groups = false;
        self
    }
}
