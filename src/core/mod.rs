pub mod errors;
pub mod models;
pub mod stats;
pub mod tasks;

pub use errors::StudydeskError;
pub use models::{
    Chapter,
    DashboardData,
    ProgressChart,
    SessionStatus,
    StudySession,
    SubjectProgress,
};
