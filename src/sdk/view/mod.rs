pub mod model;
pub mod panels;

pub use model::{RequestState, Resolution, RouteObserver, RouteViewModel, SubmitTicket};
pub use panels::{RouteDetails, SubmitControl, WeatherPanel};
