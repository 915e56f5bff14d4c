pub mod catalog_client;
pub mod catalog_mapper;
pub mod data_loader;
pub mod ics;
pub mod quiz_engine;
pub mod update_watcher;
