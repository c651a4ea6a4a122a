pub mod fee;
pub mod leave;
pub mod notice;
pub mod student;

pub use fee::FeeCommands;
pub use leave::LeaveCommands;
pub use notice::NoticeCommands;
pub use student::StudentCommands;
