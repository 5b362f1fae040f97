pub mod app_layout;
pub mod content_area;
pub mod sidebar;

pub use app_layout::AppLayout;
pub use content_area::ContentArea;
pub use sidebar::Sidebar;
