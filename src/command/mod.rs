mod digest;
mod history;
pub(crate) mod output;
mod profile;

pub use digest::Digest;
pub use history::History;
pub use output::{JsonOutput, LectorOutput};
pub use profile::Profile;
