pub mod dav_response;
pub mod property_set;
pub mod reqwest_dav_client;
pub mod transport_error;

pub use dav_response::DavResponse;
pub use property_set::{PropFindEntry, PropertySet, PropertyValue, dav_property};
pub use reqwest_dav_client::ReqwestDavClient;
pub use transport_error::TransportError;
