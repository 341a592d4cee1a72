//! Outbound services: the email relay, IP geolocation and the visitor alert
//! built on top of both.

pub mod email;
pub mod geo;
pub mod http_client;
pub mod visitor;

pub use email::{EmailJsRelay, EmailRelay, TemplateParams};
pub use geo::{GeoInfo, GeoLocator, IpApiLocator};
pub use visitor::{ClientDetails, NotifyOutcome, VisitorNotifier};
