pub mod impl_dav_client;
