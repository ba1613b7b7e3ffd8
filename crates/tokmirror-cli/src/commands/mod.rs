pub mod likes;
pub mod lookup;
pub mod report;
pub mod searches;
pub mod watch;
