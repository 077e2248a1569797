pub mod debug_log;
