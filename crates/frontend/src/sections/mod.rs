//! Static sections of the landing page. They hold no data of their own and
//! only call into navigation.

pub mod about;
pub mod contact;
pub mod hero;
pub mod product_showcase;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use product_showcase::ProductShowcase;
