pub mod goal_area_repo;
pub mod voice_capture_repo;
pub mod win_repo;

pub use goal_area_repo::GoalAreaRepo;
pub use voice_capture_repo::VoiceCaptureRepo;
pub use win_repo::WinRepo;
