pub mod back_button;
pub mod card_animated;
pub mod check_list;
pub mod page_header;
pub mod status_panel;
pub mod ui;

pub use back_button::BackButton;
pub use card_animated::{stagger, CardAnimated};
pub use check_list::CheckList;
pub use page_header::PageHeader;
pub use status_panel::{EmptyPanel, ErrorPanel, LoadingPanel};
