pub mod request_id;
pub mod session_guard;

pub use request_id::{make_span_with_request_id, request_id_middleware, RequestId};
pub use session_guard::require_session;
