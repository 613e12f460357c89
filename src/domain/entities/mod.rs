//! Domain entities.

pub mod request;
pub mod response;
pub mod short_link;

pub use request::RequestContext;
pub use response::{EXPIRED_BODY, ResponseDescriptor};
pub use short_link::ShortLinkRecord;
