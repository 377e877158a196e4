pub mod attempt;
pub mod question;
pub mod quiz_result;
