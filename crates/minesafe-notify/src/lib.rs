pub mod center;
pub mod message;
pub mod notifier;

pub use center::NotifyCenter;
pub use message::{NotifyLevel, NotifyMessage};
pub use notifier::{Notifier, NotifyResult, WebhookNotifier};
