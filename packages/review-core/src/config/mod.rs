//! Configuration for the review data layer.

pub mod db;
