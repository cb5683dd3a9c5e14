pub mod footer;
pub mod layout;
pub mod page;

pub use footer::Footer;
pub use layout::{Layout, RoutedLayout};
pub use page::Page;
