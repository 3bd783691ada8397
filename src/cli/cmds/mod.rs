pub mod balance;
pub mod init;
pub mod monthly;
pub mod options;
pub mod overview;
pub mod root;
pub mod summary;
pub mod weekly;
pub mod yearly;
