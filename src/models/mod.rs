mod credential;
mod params;

pub use credential::Credential;
pub use params::{ParamValue, RequestParams};
