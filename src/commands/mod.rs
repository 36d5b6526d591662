pub mod graph;
pub mod list;
pub mod play;
pub mod run;
pub mod terminal;

pub use graph::*;
pub use list::*;
pub use play::*;
pub use run::*;
pub use terminal::*;
