pub mod activate;
pub mod browse;
pub mod copy;
pub mod export;
pub mod list;
pub mod load;
pub mod tags;
