pub mod clean;
pub mod inspect;
pub mod run;

use crate::error::Result;

pub use clean::CleanCommand;
pub use inspect::InspectCommand;
pub use run::RunCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
