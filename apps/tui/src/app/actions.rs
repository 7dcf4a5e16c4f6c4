use std::fmt;
use std::sync::Arc;

use petrodash::api::{
    ApiError, Company, PozoDetail, ProductionAggregates, ProductionFilters, ProductionMonthly,
    WellsApi,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Work queued by input handlers and run by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Wells,
    WellDetail(String),
    MonthlyProduction(String),
    Companies,
    /// Carries the filters it was issued for so late answers can be told apart.
    Aggregates(ProductionFilters),
}

impl Request {
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Wells => "Cargando pozos...",
            Self::WellDetail(_) => "Cargando detalle del pozo...",
            Self::MonthlyProduction(_) => "Cargando producción mensual...",
            Self::Companies => "Cargando empresas...",
            Self::Aggregates(_) => "Cargando datos de producción...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Wells(Vec<PozoDetail>),
    WellDetail(Option<PozoDetail>),
    MonthlyProduction(Vec<ProductionMonthly>),
    Companies(Vec<Company>),
    Aggregates(Option<ProductionAggregates>),
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub request: Request,
    pub result: Result<Response, String>,
}

pub struct AppActions {
    api: Arc<dyn WellsApi>,
    pub max_wells: usize,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl fmt::Debug for AppActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppActions")
            .field("max_wells", &self.max_wells)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl AppActions {
    pub fn new(api: Arc<dyn WellsApi>, max_wells: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            max_wells,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub async fn execute(
        api: &dyn WellsApi,
        request: &Request,
        max_wells: usize,
    ) -> Result<Response, ApiError> {
        let response = match request {
            Request::Wells => Response::Wells(api.wells(max_wells).await?),
            Request::WellDetail(id) => Response::WellDetail(api.well(id).await?),
            Request::MonthlyProduction(id) => {
                Response::MonthlyProduction(api.monthly_production(id).await?)
            }
            Request::Companies => Response::Companies(api.companies(None).await?),
            Request::Aggregates(filters) => {
                Response::Aggregates(api.production_aggregates(filters).await?)
            }
        };
        Ok(response)
    }

    /// Runs the request on a background task; the result comes back
    /// through [`try_recv`](Self::try_recv).
    pub fn spawn(&mut self, request: Request) {
        debug!(?request, "dispatching request");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let max_wells = self.max_wells;
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = Self::execute(api.as_ref(), &request, max_wells)
                .await
                .map_err(|e| {
                    warn!(?request, error = %e, "request failed");
                    e.to_string()
                });
            let _ = tx.send(Completion { request, result });
        });
    }

    pub fn try_recv(&mut self) -> Option<Completion> {
        let completion = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<Completion> {
        let completion = self.rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    pub async fn fetch_wells(&self) -> Result<Vec<PozoDetail>, ApiError> {
        self.api.wells(self.max_wells).await
    }
}
