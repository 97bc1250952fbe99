pub mod build;
pub mod bundle;
pub mod new;
pub mod watch;
