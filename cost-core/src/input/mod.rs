/// Normalization of raw form fields into a `JobInput`

pub mod form;
pub mod normalize;

pub use form::RawJobForm;
pub use normalize::{parse_amount, parse_optional_amount};
