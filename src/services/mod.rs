pub mod fire_feed;
