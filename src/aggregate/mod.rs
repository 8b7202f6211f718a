pub mod class_grouper;
pub mod group_aggregator;
pub mod statistics;
