use crate::sdk::routing::coords::{Coordinate, CoordinateError};
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{RouteRequest, RouteResult};
use crate::sdk::routing::service::RouteOptimizer;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Pending,
    Success(RouteResult),
    Failure(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Notified each time a submission resolves successfully.
pub trait RouteObserver {
    fn route_changed(&mut self, result: &RouteResult);
}

/// Handed out by [`RouteViewModel::submit`]; pass its id back to [`RouteViewModel::resolve`].
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub id: u64,
    pub request: RouteRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer submission was made after this one; the outcome was dropped.
    Stale,
}

/// Form state plus the submit/resolve workflow around a [`RouteOptimizer`].
pub struct RouteViewModel<S, O> {
    service: Arc<S>,
    observer: O,
    start_input: String,
    end_input: String,
    state: RequestState,
    error: Option<String>,
    last_result: Option<RouteResult>,
    latest_ticket: u64,
}

impl<S: RouteOptimizer, O: RouteObserver> RouteViewModel<S, O> {
    pub fn new(service: S, observer: O) -> Self {
        Self {
            service: Arc::new(service),
            observer,
            start_input: String::new(),
            end_input: String::new(),
            state: RequestState::Idle,
            error: None,
            last_result: None,
            latest_ticket: 0,
        }
    }

    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    /// Text for the error banner, if one should be shown.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The most recent successful route; survives later failures.
    pub fn last_result(&self) -> Option<&RouteResult> {
        self.last_result.as_ref()
    }

    /// Stores the start field text, flagging it in the banner if it does not parse.
    pub fn set_start_input(
        &mut self,
        text: impl Into<String>,
    ) -> Result<Coordinate, CoordinateError> {
        self.start_input = text.into();
        let parsed = self.start_input.parse::<Coordinate>();
        self.note_input_error(&parsed);
        parsed
    }

    pub fn set_end_input(
        &mut self,
        text: impl Into<String>,
    ) -> Result<Coordinate, CoordinateError> {
        self.end_input = text.into();
        let parsed = self.end_input.parse::<Coordinate>();
        self.note_input_error(&parsed);
        parsed
    }

    fn note_input_error(&mut self, parsed: &Result<Coordinate, CoordinateError>) {
        if let Err(err) = parsed {
            log::debug!("Rejected coordinate input: {:?}", err);
            self.error = Some(err.to_string());
        }
    }

    /// Moves to `Pending` and returns the request to send.
    ///
    /// Both inputs must parse; otherwise the banner shows the format error and
    /// the state is left untouched. Allowed from any state, including `Pending`.
    pub fn submit(&mut self) -> Result<SubmitTicket, CoordinateError> {
        let coords = self
            .start_input
            .parse::<Coordinate>()
            .and_then(|start| {
                self.end_input
                    .parse::<Coordinate>()
                    .map(|end| (start, end))
            });
        let (start, end) = match coords {
            Ok(pair) => pair,
            Err(err) => {
                log::warn!("Submission blocked: {}", err);
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        self.latest_ticket += 1;
        self.error = None;
        self.state = RequestState::Pending;
        log::info!(
            "Submitting route request #{}: {} -> {}",
            self.latest_ticket,
            start,
            end
        );

        Ok(SubmitTicket {
            id: self.latest_ticket,
            request: self.service.build_request(start, end),
        })
    }

    /// Applies the outcome of the call made for `ticket_id`.
    ///
    /// Outcomes for anything but the latest ticket are discarded. A failure
    /// sets the banner but keeps the last successful route on screen.
    pub fn resolve(
        &mut self,
        ticket_id: u64,
        outcome: Result<RouteResult, RoutingError>,
    ) -> Resolution {
        if ticket_id != self.latest_ticket || !self.state.is_pending() {
            log::debug!(
                "Discarding stale response #{} (latest is #{})",
                ticket_id,
                self.latest_ticket
            );
            return Resolution::Stale;
        }

        match outcome {
            Ok(result) => {
                log::info!(
                    "Route request #{} succeeded: {}, {}",
                    ticket_id,
                    result.distance_text(),
                    result.travel_time.display_text
                );
                self.observer.route_changed(&result);
                self.last_result = Some(result.clone());
                self.state = RequestState::Success(result);
            }
            Err(err) => {
                log::error!("Error fetching optimized route: {}", err);
                let message = err.user_message().to_string();
                self.error = Some(message.clone());
                self.state = RequestState::Failure(message);
            }
        }
        Resolution::Applied
    }

    /// Submits and awaits the response in one step.
    pub async fn submit_and_wait(&mut self) -> Result<Resolution, CoordinateError> {
        let ticket = self.submit()?;
        let service = self.service();
        let outcome = service.optimize_route(&ticket.request).await;
        Ok(self.resolve(ticket.id, outcome))
    }
}
