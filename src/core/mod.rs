pub mod ingest;
pub mod mapper;
pub mod price_axis;
pub mod primitives;
pub mod strike;
pub mod types;

pub use ingest::parse_strike_records_json;
pub use mapper::CoordinateMapper;
pub use price_axis::PriceAxis;
pub use strike::StrikeRecord;
pub use types::Bounding;
