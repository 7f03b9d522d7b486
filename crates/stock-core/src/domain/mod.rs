//! 시장 데이터 집계를 위한 도메인 모델.

mod company;
mod quote;
mod series;
mod statistics;
mod window;

pub use company::*;
pub use quote::*;
pub use series::*;
pub use statistics::*;
pub use window::*;
