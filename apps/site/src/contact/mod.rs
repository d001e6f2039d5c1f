// Contact pipeline: the browser-side form model, the /api/contact handler,
// and the outbound mail transport it relays through.

pub mod form;
pub mod handlers;
pub mod mailer;
pub mod message;
pub mod models;
pub mod rate_limit;
pub mod validation;
