// feature-domain library entry point
pub mod error;
pub mod feature;
pub mod result_code;
pub mod scenario;
pub mod suite;
pub use error::DomainError;
pub use feature::Feature;
pub use result_code::ResultCode;
pub use scenario::{Scenario, ScenarioResult};
pub use suite::{Environment, Suite};
