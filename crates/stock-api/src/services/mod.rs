//! 라우트 핸들러가 사용하는 도메인 서비스.

pub mod market_data;

pub use market_data::MarketDataService;
