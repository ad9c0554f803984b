pub mod error_code;
pub mod errors;
pub mod response;
pub mod result;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

pub use error_code::ErrorCode;
pub use errors::ResponseError;
pub use response::{ResponseSummary, ResultEntry, SendResponse};
pub use result::SendResult;
