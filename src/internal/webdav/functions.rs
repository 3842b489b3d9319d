pub mod get_folders_raw_data;
pub mod propfind_body;
pub mod send_request;
