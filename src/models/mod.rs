pub mod checkin;
pub mod fix;
pub mod flow_state;
pub mod street;
pub mod timestamp_pattern;

pub use checkin::CheckInRecord;
pub use fix::LocationFix;
pub use flow_state::FlowState;
pub use street::{Address, StreetLabel};
pub use timestamp_pattern::TimestampPattern;
