use crate::HashMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Criticality {
    /// Leaving the field empty makes the mask unreleasable
    Critical,
    /// Leaving the field empty is allowed but flagged
    Desired,
    Optional,
}

/// Importance of each field, supplied from outside the record. Fields not listed are optional.
#[derive(Debug, Clone)]
pub struct FieldCriticality {
    fields: HashMap<String, Criticality>,
}

impl Default for FieldCriticality {
    fn default() -> Self {
        FieldCriticality::empty()
            .with("name", Criticality::Critical)
            .with("author", Criticality::Critical)
            .with("category", Criticality::Critical)
            .with("description", Criticality::Desired)
            .with("tags", Criticality::Desired)
            .with("license", Criticality::Desired)
            .with("website", Criticality::Desired)
    }
}

impl FieldCriticality {
    pub fn empty() -> Self {
        FieldCriticality {
            fields: Default::default(),
        }
    }

    pub fn with(
        mut self,
        field: impl Into<String>,
        criticality: Criticality,
    ) -> Self {
        self.fields.insert(field.into(), criticality);
        self
    }

    pub fn criticality(
        &self,
        field: &str,
    ) -> Criticality {
        self.fields
            .get(field)
            .copied()
            .unwrap_or(Criticality::Optional)
    }

    pub fn is_critical(
        &self,
        field: &str,
    ) -> bool {
        self.criticality(field) == Criticality::Critical
    }

    pub fn is_desired(
        &self,
        field: &str,
    ) -> bool {
        self.criticality(field) == Criticality::Desired
    }
}
