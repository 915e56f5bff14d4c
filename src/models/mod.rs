pub mod beer;
pub mod catalog;
pub mod equipment;
pub mod event;
pub mod quiz;
pub mod release;
