//! reqwest 传输层：对着 wiremock 检查真正发出去的请求和 multistatus 的解析。

use bytes::Bytes;
use futures_util::TryStreamExt;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::WebdavAuth;
use crate::filesystem::structs::{FilesystemError, StorageAttributes, WebDavAdapter, WriteConfig};
use crate::filesystem::traits::FilesystemAdapter;
use crate::open_remote_filesystem;
use crate::tests::init_tracing;
use crate::webdav::enums::{DavMethod, Depth};
use crate::webdav::structs::{ReqwestDavClient, TransportError, dav_property};
use crate::webdav::traits::DavClient;

const DAV_ROOT: &str = "/remote.php/dav/";

fn adapter_for(server: &MockServer) -> WebDavAdapter<ReqwestDavClient> {
    let auth = WebdavAuth::new("user", "pass", &format!("{}/remote.php/dav", server.uri())).unwrap();
    open_remote_filesystem(auth)
}

fn docs_listing() -> String {
    r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:">
    <d:response>
        <d:href>/remote.php/dav/docs/</d:href>
        <d:propstat>
            <d:prop>
                <d:displayname>docs</d:displayname>
                <d:resourcetype><d:collection/></d:resourcetype>
            </d:prop>
            <d:status>HTTP/1.1 200 OK</d:status>
        </d:propstat>
    </d:response>
    <d:response>
        <d:href>/remote.php/dav/docs/My%20File.txt</d:href>
        <d:propstat>
            <d:prop>
                <d:displayname>My File.txt</d:displayname>
                <d:getcontentlength>42</d:getcontentlength>
                <d:getcontenttype>text/plain</d:getcontenttype>
                <d:getlastmodified>Sun, 06 Nov 1994 08:49:37 GMT</d:getlastmodified>
                <d:resourcetype/>
            </d:prop>
            <d:status>HTTP/1.1 200 OK</d:status>
        </d:propstat>
    </d:response>
    <d:response>
        <d:href>/remote.php/dav/docs/sub/</d:href>
        <d:propstat>
            <d:prop>
                <d:displayname>sub</d:displayname>
                <d:resourcetype><d:collection/></d:resourcetype>
            </d:prop>
            <d:status>HTTP/1.1 200 OK</d:status>
        </d:propstat>
    </d:response>
</d:multistatus>"#
        .to_string()
}

#[tokio::test]
async fn listing_sends_depth_one_propfind_and_strips_the_base_path() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/dav/docs/"))
        .and(header("Depth", "1"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .and(body_string_contains("getcontentlength"))
        .respond_with(ResponseTemplate::new(207).set_body_string(docs_listing()))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let items: Vec<_> = adapter.list_contents("docs", false).try_collect().await.unwrap();

    assert_eq!(items.len(), 2);
    match &items[0] {
        StorageAttributes::File(file) => {
            assert_eq!(file.path, "docs/My File.txt");
            assert_eq!(file.file_size, Some(42));
            assert_eq!(file.mime_type.as_deref(), Some("text/plain"));
            assert_eq!(file.last_modified, Some(784_111_777));
        }
        other => panic!("意外的条目: {other:?}"),
    }
    assert!(items[1].is_dir());
    assert_eq!(items[1].path(), "docs/sub");
}

#[tokio::test]
async fn prop_find_keeps_server_order_and_relative_hrefs() {
    let server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/dav/docs/"))
        .respond_with(ResponseTemplate::new(207).set_body_string(docs_listing()))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let entries = adapter
        .client()
        .prop_find("docs/", &[dav_property::CONTENT_LENGTH], Depth::One)
        .await
        .unwrap();

    let hrefs: Vec<&str> = entries.iter().map(|e| e.href.as_str()).collect();
    assert_eq!(hrefs, ["docs/", "docs/My%20File.txt", "docs/sub/"]);
    assert_eq!(entries[1].properties.text(dav_property::CONTENT_LENGTH), Some("42"));
}

#[tokio::test]
async fn absolute_hrefs_and_failed_propstats() {
    let server = MockServer::start().await;
    let body = format!(
        r#"<?xml version="1.0"?>
<D:multistatus xmlns:D="DAV:">
    <D:response>
        <D:href>{}/remote.php/dav/report.pdf</D:href>
        <D:propstat>
            <D:prop><D:getcontenttype/></D:prop>
            <D:status>HTTP/1.1 404 Not Found</D:status>
        </D:propstat>
        <D:propstat>
            <D:prop><D:getcontentlength>7</D:getcontentlength></D:prop>
            <D:status>HTTP/1.1 200 OK</D:status>
        </D:propstat>
    </D:response>
</D:multistatus>"#,
        server.uri()
    );

    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/dav/report.pdf"))
        .and(header("Depth", "0"))
        .respond_with(ResponseTemplate::new(207).set_body_string(body))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let attributes = adapter.file_size("report.pdf").await.unwrap();

    assert_eq!(attributes.path, "report.pdf");
    assert_eq!(attributes.file_size, Some(7));
    assert_eq!(attributes.mime_type, None);
}

#[tokio::test]
async fn missing_resource_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);

    assert!(!adapter.file_exists("nope").await);

    let err = adapter.metadata("nope").await.unwrap_err();
    match err.transport_error() {
        Some(TransportError::Http { status, .. }) => assert_eq!(*status, StatusCode::NOT_FOUND),
        other => panic!("意外的来源: {other:?}"),
    }
}

#[tokio::test]
async fn write_probes_creates_and_puts() {
    let server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/dav/a"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("MKCOL"))
        .and(path("/remote.php/dav/a/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/remote.php/dav/a/f%20g.txt"))
        .and(body_string_contains("payload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    adapter
        .write("a/f g.txt", Bytes::from_static(b"payload"), &WriteConfig::new())
        .await
        .unwrap();

    let methods: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.method.to_string())
        .collect();
    assert_eq!(methods, ["PROPFIND", "MKCOL", "PUT"]);
}

#[tokio::test]
async fn copy_sends_an_absolute_destination() {
    let server = MockServer::start().await;
    let existing = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:">
    <d:response>
        <d:href>/remote.php/dav/b/</d:href>
        <d:propstat>
            <d:prop><d:resourcetype><d:collection/></d:resourcetype></d:prop>
            <d:status>HTTP/1.1 200 OK</d:status>
        </d:propstat>
    </d:response>
</d:multistatus>"#;

    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/dav/b"))
        .respond_with(ResponseTemplate::new(207).set_body_string(existing))
        .mount(&server)
        .await;
    Mock::given(method("COPY"))
        .and(path("/remote.php/dav/a.txt"))
        .and(header(
            "Destination",
            format!("{}/remote.php/dav/b/c.txt", server.uri()).as_str(),
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    adapter.copy("a.txt", "b/c.txt", &WriteConfig::new()).await.unwrap();
}

#[tokio::test]
async fn mkcol_method_not_allowed_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("MKCOL"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);
    let err = adapter
        .create_directory("x", &WriteConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FilesystemError::UnableToCreateDirectory { .. }));
    assert_eq!(
        err.transport_error().and_then(TransportError::status),
        Some(StatusCode::METHOD_NOT_ALLOWED)
    );
}

#[tokio::test]
async fn read_returns_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/remote.php/dav/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("remember"))
        .mount(&server)
        .await;

    let adapter = adapter_for(&server);

    assert_eq!(adapter.read("notes.txt").await.unwrap(), Bytes::from_static(b"remember"));
}

#[tokio::test]
async fn locators_outside_the_base_url_are_refused() {
    let server = MockServer::start().await;
    let adapter = adapter_for(&server);

    let err = adapter
        .client()
        .request(DavMethod::Get, "../../etc/passwd", None, HeaderMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::OutsideBaseUrl(_)));

    let err = adapter.read("..").await.unwrap_err();
    assert!(matches!(
        err.transport_error(),
        Some(TransportError::OutsideBaseUrl(_))
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(adapter.client().absolute_url("").unwrap(), format!("{}{DAV_ROOT}", server.uri()));
}

#[tokio::test]
async fn destination_outside_the_base_url_fails_with_a_reason() {
    let server = MockServer::start().await;
    let adapter = adapter_for(&server);

    let err = adapter
        .move_file("a.txt", "..", &WriteConfig::new())
        .await
        .unwrap_err();
    match &err {
        FilesystemError::UnableToMoveFile { to, reason, cause, .. } => {
            assert_eq!(to, "..");
            assert!(reason.starts_with("无法生成目标地址"), "{reason}");
            assert!(matches!(cause, Some(TransportError::OutsideBaseUrl(_))));
        }
        other => panic!("意外的错误: {other:?}"),
    }

    let err = adapter
        .copy("a.txt", "..", &WriteConfig::new())
        .await
        .unwrap_err();
    match &err {
        FilesystemError::UnableToCopyFile { reason, cause, .. } => {
            assert!(!reason.is_empty());
            assert!(matches!(cause, Some(TransportError::OutsideBaseUrl(_))));
        }
        other => panic!("意外的错误: {other:?}"),
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}
