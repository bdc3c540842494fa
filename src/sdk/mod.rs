pub mod config;
pub mod map;
pub mod routing;
pub mod util;
pub mod view;
