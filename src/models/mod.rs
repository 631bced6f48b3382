pub mod csv;
pub mod menu;
pub mod page_size;

pub use csv::{export_menu_tsv, import_menu_csv};
pub use menu::{MenuImage, MenuItem, MenuOption};
pub use page_size::PageSize;
