pub mod use_fetch;
pub mod use_form;

pub use use_fetch::{Fetch, use_fetch};
pub use use_form::{FormAction, FormState, UseFormHandle, use_form};
