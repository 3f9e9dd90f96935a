pub mod page_load;
pub mod page_state;

pub use page_load::{LoadPhase, LoadTicket, PageLoad};
pub use page_state::{LoadStatus, PageState};
