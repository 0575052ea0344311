pub mod order_response;

pub use order_response::{
    CreateOrderResponse, OrderHistoryItem, OrderQuoteResponse, OrderSummaryResponse,
    OrderTransactionsResponse,
};
