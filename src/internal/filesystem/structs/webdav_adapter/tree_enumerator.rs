//! 目录列举：每个目录一次 Depth 1 的 PROPFIND，深度模式下按先序深度优先展开。
//!
//! 结果是惰性的 [`Stream`](futures_util::Stream)：只有消费者继续拉取时才会请求下一层目录，
//! 中途停止就不会再有网络请求。任一目录查询失败都会以错误结束整个流，已经产出的条目不会撤回。

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use tracing::debug;

use crate::internal::filesystem::enums::MetadataKind;
use crate::internal::filesystem::functions::encode_path::{
    decode_locator, directory_locator, trim_path,
};
use crate::internal::filesystem::functions::normalize::{METADATA_FIELDS, normalize};
use crate::internal::filesystem::structs::filesystem_error::transport_reason;
use crate::internal::filesystem::structs::{FilesystemError, StorageAttributes};
use crate::internal::webdav::enums::Depth;
use crate::internal::webdav::structs::PropFindEntry;
use crate::internal::webdav::traits::dav_client::DavClient;

use super::WebDavAdapter;

enum Frame {
    /// 还没请求过的目录
    Pending(String),
    /// 已拿到的子条目，按服务器顺序消费
    Fetched(std::vec::IntoIter<PropFindEntry>),
}

struct Listing<'a, C: DavClient> {
    client: &'a C,
    deep: bool,
    stack: Vec<Frame>,
}

impl<C: DavClient> Listing<'_, C> {
    async fn advance(&mut self) -> Result<Option<StorageAttributes>, FilesystemError> {
        loop {
            match self.stack.pop() {
                None => return Ok(None),
                Some(Frame::Pending(directory)) => {
                    let children = fetch_children(self.client, &directory).await?;
                    self.stack.push(Frame::Fetched(children.into_iter()));
                }
                Some(Frame::Fetched(mut children)) => {
                    let Some(PropFindEntry { href, properties }) = children.next() else {
                        continue;
                    };
                    self.stack.push(Frame::Fetched(children));

                    let child_path = decode_locator(&href);
                    let Some(attributes) = normalize(&properties, &child_path) else {
                        debug!(%href, "child without properties, skipped");
                        continue;
                    };

                    // 先产出目录本身，下一次拉取时再展开它，保证先序
                    if self.deep && attributes.is_dir() {
                        self.stack.push(Frame::Pending(child_path));
                    }
                    return Ok(Some(attributes));
                }
            }
        }
    }
}

/// 查询目录的直接子条目，丢弃响应中的第一项（目录自身）
async fn fetch_children<C: DavClient>(
    client: &C,
    directory: &str,
) -> Result<Vec<PropFindEntry>, FilesystemError> {
    let locator = directory_locator(directory);

    debug!(%locator, "PROPFIND depth 1");

    let mut entries = client
        .prop_find(&locator, METADATA_FIELDS, Depth::One)
        .await
        .map_err(|e| {
            FilesystemError::retrieve_metadata(
                directory,
                MetadataKind::ListContents,
                transport_reason(&e),
                Some(e),
            )
        })?;

    if !entries.is_empty() {
        entries.remove(0);
    }

    Ok(entries)
}

impl<C: DavClient> WebDavAdapter<C> {
    pub(crate) fn list_stream<'a>(
        &'a self,
        path: &str,
        deep: bool,
    ) -> BoxStream<'a, Result<StorageAttributes, FilesystemError>> {
        let listing = Listing {
            client: self.client.as_ref(),
            deep,
            stack: vec![Frame::Pending(trim_path(path).to_string())],
        };

        stream::try_unfold(listing, |mut listing| async move {
            let next = listing.advance().await?;
            Ok(next.map(|attributes| (attributes, listing)))
        })
        .boxed()
    }
}
