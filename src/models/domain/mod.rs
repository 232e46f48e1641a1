pub mod grading;
pub mod question;
pub mod quiz_session;
pub use grading::{GradingResult, QuestionGrade};
pub use question::{Choice, QuestionRecord};
pub use quiz_session::QuizSession;
