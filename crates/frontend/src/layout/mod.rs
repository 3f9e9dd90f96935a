pub mod footer;
pub mod global_context;
pub mod header;
pub mod navigation;

pub use footer::Footer;
pub use header::Header;
