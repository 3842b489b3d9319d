pub mod dav_client;
