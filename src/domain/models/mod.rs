mod answer;
mod conversation;
mod generation;
mod prompt;
mod question;

pub use answer::*;
pub use conversation::*;
pub use generation::*;
pub use prompt::*;
pub use question::*;
