pub mod add_modal;
pub mod business_list;
pub mod header;
pub mod map_view;
pub mod search_bar;
pub mod toolbar;
