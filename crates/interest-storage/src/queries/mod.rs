pub mod kv_ops;
