use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::internal::webdav::enums::{DavMethod, Depth};
use crate::internal::webdav::functions::get_folders_raw_data::get_folders_raw_data;
use crate::internal::webdav::functions::send_request::send_request;
use crate::internal::webdav::raw_xml::impl_multi_status::ToPropFindEntries;
use crate::internal::webdav::structs::{
    DavResponse, PropFindEntry, ReqwestDavClient, TransportError,
};
use crate::internal::webdav::traits::dav_client::DavClient;

#[async_trait]
impl DavClient for ReqwestDavClient {
    async fn request(
        &self,
        method: DavMethod,
        locator: &str,
        body: Option<Bytes>,
        headers: HeaderMap,
    ) -> Result<DavResponse, TransportError> {
        let url = self.webdav_auth.resolve(locator)?;
        send_request(&self.webdav_auth, method, url.as_str(), body, headers).await
    }

    async fn prop_find(
        &self,
        locator: &str,
        properties: &[&str],
        depth: Depth,
    ) -> Result<Vec<PropFindEntry>, TransportError> {
        let url = self.webdav_auth.resolve(locator)?;
        let multi_status =
            get_folders_raw_data(&self.webdav_auth, url.as_str(), depth, properties).await?;

        Ok(multi_status.to_prop_find_entries(&self.webdav_auth.base_url))
    }

    fn absolute_url(&self, locator: &str) -> Result<String, TransportError> {
        Ok(self.webdav_auth.resolve(locator)?.to_string())
    }
}
