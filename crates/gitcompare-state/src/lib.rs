pub mod model;
pub mod msg;
pub mod settings;
pub mod store;
pub mod view;
