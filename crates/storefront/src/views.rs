pub mod gallery;
pub mod home;
pub mod orders;
pub mod story;

pub use gallery::{GalleryPage, GalleryView};
pub use home::{HomePage, HomeView};
pub use orders::{OrdersFilter, OrdersPage, OrdersView};
pub use story::StoryView;
