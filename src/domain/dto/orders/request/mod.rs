pub mod create_order_request;

pub use create_order_request::CreateOrderRequest;
