pub mod impl_filesystem_adapter;
