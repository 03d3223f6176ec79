mod answer_question;
mod converse;

pub use answer_question::*;
pub use converse::*;
