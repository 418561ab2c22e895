pub mod firms;
