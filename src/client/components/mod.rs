pub mod navbar;
pub mod page;
pub mod plan;

pub use navbar::Navbar;
pub use page::Page;
