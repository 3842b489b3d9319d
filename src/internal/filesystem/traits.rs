pub mod filesystem_adapter;
