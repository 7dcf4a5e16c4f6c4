/// Filters for the company production aggregates endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionFilters {
    pub empresa: Option<String>,
    pub inicio_anio: Option<i32>,
    pub inicio_mes: Option<u32>,
    pub fin_anio: Option<i32>,
    pub fin_mes: Option<u32>,
}

impl ProductionFilters {
    /// Aggregates are only requested once a company or a year bound is set.
    pub const fn has_selection(&self) -> bool {
        self.empresa.is_some() || self.inicio_anio.is_some() || self.fin_anio.is_some()
    }

    pub fn set_company(&mut self, company: Option<String>) {
        self.empresa = company.filter(|name| !name.is_empty());
    }

    pub fn set_start_year(&mut self, year: Option<i32>) {
        self.inicio_anio = year;
        if year.is_none() {
            self.inicio_mes = None;
        }
    }

    /// Ignored while no start year is selected.
    pub fn set_start_month(&mut self, month: Option<u32>) {
        if self.inicio_anio.is_some() || month.is_none() {
            self.inicio_mes = month.filter(|m| (1..=12).contains(m));
        }
    }

    pub fn set_end_year(&mut self, year: Option<i32>) {
        self.fin_anio = year;
        if year.is_none() {
            self.fin_mes = None;
        }
    }

    /// Ignored while no end year is selected.
    pub fn set_end_month(&mut self, month: Option<u32>) {
        if self.fin_anio.is_some() || month.is_none() {
            self.fin_mes = month.filter(|m| (1..=12).contains(m));
        }
    }

    /// Query parameters in the order the backend documents them. Months are
    /// only sent alongside their year.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(empresa) = &self.empresa {
            pairs.push(("empresa", empresa.clone()));
        }

        if let Some(year) = self.inicio_anio {
            pairs.push(("inicio_anio", year.to_string()));
            if let Some(month) = self.inicio_mes {
                pairs.push(("inicio_mes", month.to_string()));
            }
        }

        if let Some(year) = self.fin_anio {
            pairs.push(("fin_anio", year.to_string()));
            if let Some(month) = self.fin_mes {
                pairs.push(("fin_mes", month.to_string()));
            }
        }

        pairs
    }
}
