use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    Short,
    Long,
}

/// Fire-and-forget display of a transient message
pub trait Toaster: Send + Sync {
    fn show(&self, message: &str, duration: ToastDuration);
}

/// Show a short toast
pub fn show_toast<T: Toaster + ?Sized>(toaster: &T, message: &str) {
    toaster.show(message, ToastDuration::Short);
}

/// Writes toasts to the log instead of a screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToaster;

impl Toaster for TracingToaster {
    fn show(&self, message: &str, duration: ToastDuration) {
        info!(?duration, "{}", message);
    }
}

/// A toast handed over to the host's UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration: ToastDuration,
}

/// Forwards toasts to a channel drained by the host
#[derive(Debug, Clone)]
pub struct ChannelToaster {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ChannelToaster {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Toaster for ChannelToaster {
    fn show(&self, message: &str, duration: ToastDuration) {
        let toast = Toast {
            message: message.to_string(),
            duration,
        };
        if self.tx.send(toast).is_err() {
            warn!("toast dropped, receiver closed: {}", message);
        }
    }
}
