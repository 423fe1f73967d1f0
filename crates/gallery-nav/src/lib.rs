pub mod bounded;
pub mod carousel;

pub use bounded::BoundedNav;
pub use carousel::Carousel;
