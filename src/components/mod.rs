pub mod checklist;
pub mod footer;
pub mod header;
pub mod modals;
pub mod tab_bar;
pub mod template_editor;
pub mod trip_builder;
