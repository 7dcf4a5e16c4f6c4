use crate::api::models::PozoDetail;
use crate::domain::StatusCategory;
use crate::status::StatusClassifier;

/// Well attributes that can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WellField {
    #[default]
    Company,
    Province,
    Watershed,
    Area,
    Field,
    Status,
    ResourceType,
    WellType,
}

impl WellField {
    pub const ALL: [Self; 8] = [
        Self::Company,
        Self::Province,
        Self::Watershed,
        Self::Area,
        Self::Field,
        Self::Status,
        Self::ResourceType,
        Self::WellType,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Empresa",
            Self::Province => "Provincia",
            Self::Watershed => "Cuenca",
            Self::Area => "Área",
            Self::Field => "Yacimiento",
            Self::Status => "Estado",
            Self::ResourceType => "Tipo de recurso",
            Self::WellType => "Tipo de pozo",
        }
    }

    pub fn value_of(self, well: &PozoDetail) -> &str {
        match self {
            Self::Company => &well.company,
            Self::Province => &well.province,
            Self::Watershed => &well.watershed,
            Self::Area => &well.area,
            Self::Field => &well.field,
            Self::Status => well.status.as_deref().unwrap_or(""),
            Self::ResourceType => &well.resource_type,
            Self::WellType => &well.well_type,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Exact-match filter over the wells table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellFilter {
    pub field: WellField,
    pub value: String,
    pub category: Option<StatusCategory>,
}

impl WellFilter {
    pub fn is_active(&self) -> bool {
        !self.value.is_empty() || self.category.is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.category = None;
    }

    pub fn matches(&self, well: &PozoDetail, classifier: &StatusClassifier) -> bool {
        if !self.value.is_empty() && self.field.value_of(well) != self.value {
            return false;
        }

        self.category
            .is_none_or(|category| classifier.classify(well.status.as_deref()) == category)
    }

    /// Indices of matching wells, in their original order.
    pub fn apply(&self, wells: &[PozoDetail], classifier: &StatusClassifier) -> Vec<usize> {
        wells
            .iter()
            .enumerate()
            .filter(|(_, well)| self.matches(well, classifier))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.value.is_empty() {
            parts.push(format!("{} = {}", self.field.label(), self.value));
        }
        if let Some(category) = self.category {
            parts.push(format!("Categoría = {}", category.label()));
        }
        if parts.is_empty() {
            "Sin filtro".to_string()
        } else {
            parts.join("  ·  ")
        }
    }

    /// Steps through no category, then each category in turn.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(StatusCategory::ALL[0]),
            Some(current) => StatusCategory::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|index| StatusCategory::ALL.get(index + 1).copied()),
        };
    }
}
