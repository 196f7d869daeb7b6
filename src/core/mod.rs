pub mod activation;
pub mod format;
pub mod host;
pub mod widget;

pub use activation::{Activation, ActivationStrategy, QuickTimeHandler};
pub use format::FormatSpec;
pub use host::{Clock, HostEvent, MemoryHost, ShortcutHost, TargetField};
pub use widget::ShortcutWidget;
