//! Build report notifications for chat webhooks.
//!
//! The host hands over a batch of [`BuildReport`]s. Every build in it is turned
//! into a text message by the [`MessageFormatter`] and posted once to the
//! configured webhook by the [`Deliverer`]. Failures are logged per build and
//! never stop the batch.
//!
//! # Usage
//!
//! ```rust,no_run
//! use buildchat::{BuildReport, Notifier};
//! use buildchat_config::NotifierConfig;
//!
//! # async fn example(reports: Vec<BuildReport>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotifierConfig::new("https://hooks.slack.com/services/T000/B000/XXXX");
//! let notifier = Notifier::from_config(&config)?;
//! let summary = notifier.send_message(&reports).await;
//! println!("{} delivered", summary.delivered);
//! # Ok(())
//! # }
//! ```

pub mod delivery;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod notifier;
pub mod prelude;
pub mod report;

#[cfg(test)]
mod mock;

pub use delivery::{Deliverer, DeliveryOutcome, WebhookPayload};
pub use driver::{BatchSummary, run};
pub use formatter::{FormatError, MessageFormatter};
pub use notifier::{Notifier, NotifierSettings};
pub use report::{
    Build, BuildReport, BuildResult, BuildResults, Buildset, Properties, Property, Users,
};
