//! Quiz request and response values.
//!
//! - [`answers::QuizAnswers`]: validated, ordered answers from the caller
//! - [`caller::CallerIdentity`]: gateway-verified caller token (presence only)
//! - [`policy::AnswerPolicy`]: optional limits on answers
//! - [`analysis::QuizAnalysis`]: the model's analysis returned to the caller

pub mod analysis;
pub mod answers;
pub mod caller;
pub mod policy;

pub use analysis::QuizAnalysis;
pub use answers::QuizAnswers;
pub use caller::CallerIdentity;
pub use policy::AnswerPolicy;
